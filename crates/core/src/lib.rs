pub mod batch;
pub mod config;
pub mod display;
pub mod placer;
pub mod tags;
pub mod testing;

pub use batch::{list_eligible_files, BatchDriver, BatchError, BatchReport, FileOutcome, FileReport};
pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config, ConfigError,
    LoggingConfig, SorterConfig,
};
pub use display::relative_to;
pub use placer::{
    build_target, DirectoryProvisioner, FsPlacer, MoveFailureCause, PlacedFile, Placement, Placer,
    PlacerConfig, PlacerError, ProvisionError, TargetLocation,
};
pub use tags::{
    AudioFileRecord, Classification, Id3TagReader, SkipReason, TagFields, TagReadError, TagReader,
};
