//! Instrumentation around the matching core.
//!
//! Nothing in here is needed to search; it measures searches. The corpus
//! generator produces inputs, [`prepared`] builds tables ahead of the
//! clock, [`timing`] and [`space`] measure time and auxiliary space, [`report`] formats results and writes them to sinks, and
//! [`experiment`] drives a whole size grid.

pub mod corpus;
pub mod experiment;
pub mod prepared;
pub mod report;
pub mod space;
pub mod timing;

pub use corpus::{CorpusGenerator, SymbolClass};
pub use experiment::ExperimentRunner;
pub use prepared::PreparedSearch;
pub use report::{
    index_or_sentinel, ConsoleReportSink, CsvReportSink, ExperimentRecord, ReportSink,
    SearchReport,
};
pub use space::{SpaceReport, TableSpace};
pub use timing::{time_once, time_runs, Timing};
