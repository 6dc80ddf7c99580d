//! Service layer for lintent

pub mod config;
pub mod fix;
pub mod intentions;
pub mod messages;

pub use config::{ConfigService, DefaultConfigService};
pub use fix::{BufferFixApplier, FileFixApplier, FixApplier};
pub use intentions::{
    IntentionCollector, MessageRangeTest, NormalizedPathFilter, PathFilter, RangeTest,
};
pub use messages::MessageSource;
