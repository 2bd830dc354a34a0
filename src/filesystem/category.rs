use derive_more::Display;

/// Descriptive content tag attached to every file and directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Category {
    #[display("MUSIC")]
    Music,
    #[display("VIDEO")]
    Video,
    #[display("DOCUMENTS")]
    Documents,
    #[display("ZIP")]
    Zip,
    #[display("ROOT")]
    Root,
}
