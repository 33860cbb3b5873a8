pub mod converter;

pub use converter::{
    convert, convert_or_report, default_output_path, report_failure, ConversionSummary,
    ConverterService,
};
