pub mod config;
pub mod shared;
pub mod split;
pub mod table;
pub mod value;

pub use config::{Align, ColumnConfig, ConfigError, DetailField, SplitConfig, ViewerConfig};
pub use shared::Shared;
pub use split::SplitPane;
pub use table::{Record, SortDirection, SortSpec, StoreEvent, TableStore};
pub use value::compare_values;
