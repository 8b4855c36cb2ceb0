pub mod builder;
pub mod header;
pub mod view;

pub use builder::RecordBuilder;
pub use header::RecordHeader;
pub use view::RecordView;
