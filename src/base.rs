pub mod aggregate;
pub mod amount;
pub mod barchart;
pub mod charset;
pub mod config;
pub mod date;
pub mod datepart;
pub mod drilldown;
pub mod filter;
pub mod fs;
pub mod grouping;
pub mod ingest;
pub mod interval;
pub mod raw;
pub mod record;
pub mod summary;
pub mod timeseries;
pub mod tree;
pub mod util;
pub mod view;
pub mod workingset;

pub use aggregate::Aggregate;
pub use amount::Amount;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use datepart::Datepart;
pub use drilldown::DrillDownState;
pub use drilldown::Session;
pub use filter::Scope;
pub use fs::Fs;
pub use grouping::Dimension;
pub use ingest::Ingested;
pub use ingest::ingest;
pub use interval::Interval;
pub use raw::Columns;
pub use raw::Flag;
pub use raw::MalformedRecordError;
pub use raw::RawRecord;
pub use raw::Schema;
pub use raw::Sentinels;
pub use record::Record;
pub use summary::Summary;
pub use summary::summarize;
pub use timeseries::Bucket;
pub use timeseries::time_series;
pub use tree::Tree;
pub use view::DetailRow;
pub use view::Series;
pub use view::Views;
pub use workingset::Workingset;
