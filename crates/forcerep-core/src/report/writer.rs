use super::error::ReportError;
use super::fields::ReportFields;
use super::sink::OutputSink;
use super::state_data::{StateDataFields, StateDataOptions};
use crate::core::simulation::Simulation;
use crate::core::state::State;
use std::io::Write;
use tracing::{debug, instrument};

/// Something the run loop fires at regular step intervals.
pub trait Reporter {
    /// Number of steps from `current_step` until this reporter next wants to fire.
    ///
    /// Always at least 1.
    fn describe_next_report(&self, current_step: u64) -> u64;

    fn report(&mut self, simulation: &dyn Simulation, state: &State) -> Result<(), ReportError>;
}

/// Writes one delimited row every `report_interval` steps.
///
/// The header line (`#"h1","h2",...`) is written on the first firing unless the
/// reporter was opened in append mode. Rows are computed in full before
/// anything is written, so a failing firing leaves the output untouched.
pub struct PeriodicReporter<F> {
    sink: Box<dyn Write + Send>,
    report_interval: u64,
    fields: F,
    separator: u8,
    append: bool,
    initialized: bool,
}

impl<F: ReportFields> PeriodicReporter<F> {
    pub fn with_fields(
        sink: OutputSink,
        report_interval: u64,
        fields: F,
        separator: u8,
        append: bool,
    ) -> Result<Self, ReportError> {
        if report_interval == 0 {
            return Err(ReportError::Config(
                "report interval must be a positive number of steps".to_string(),
            ));
        }
        if !separator.is_ascii() {
            return Err(ReportError::Config(format!(
                "separator byte {separator:#04x} is not ASCII"
            )));
        }

        let sink = sink.open(append)?;

        Ok(Self {
            sink,
            report_interval,
            fields,
            separator,
            append,
            initialized: false,
        })
    }

    pub fn report_interval(&self) -> u64 {
        self.report_interval
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn headers(&self) -> Vec<String> {
        self.fields.headers()
    }

    /// Encodes one delimited line, escaping quotes and separators inside fields.
    fn encode_record<I, T>(
        &self,
        record: I,
        quote_style: csv::QuoteStyle,
    ) -> Result<Vec<u8>, ReportError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut encoder = csv::WriterBuilder::new()
            .delimiter(self.separator)
            .has_headers(false)
            .quote_style(quote_style)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        encoder.write_record(record)?;
        encoder
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))
    }

    fn write_header(&mut self) -> Result<(), ReportError> {
        let headers = self.fields.headers();
        let mut line = vec![b'#'];
        line.extend(self.encode_record(&headers, csv::QuoteStyle::Always)?);

        self.sink.write_all(&line)?;
        self.sink.flush()?;
        debug!(columns = headers.len(), "Wrote report header.");
        Ok(())
    }

    fn check_finite(state: &State) -> Result<(), ReportError> {
        let energy = state.total_energy();
        if energy.is_finite() {
            Ok(())
        } else {
            Err(ReportError::NonFiniteEnergy {
                step: state.step,
                value: energy,
            })
        }
    }
}

impl<F: ReportFields> Reporter for PeriodicReporter<F> {
    fn describe_next_report(&self, current_step: u64) -> u64 {
        self.report_interval - current_step % self.report_interval
    }

    #[instrument(skip_all, name = "periodic_report", fields(step = state.step))]
    fn report(&mut self, simulation: &dyn Simulation, state: &State) -> Result<(), ReportError> {
        if !self.initialized {
            self.fields.initialize(simulation)?;
            if !self.append {
                self.write_header()?;
            }
            self.initialized = true;
        }

        Self::check_finite(state)?;
        let values = self.fields.values(simulation, state)?;

        let line = self.encode_record(
            values.iter().map(ToString::to_string),
            csv::QuoteStyle::Necessary,
        )?;
        self.sink.write_all(&line)?;
        self.sink.flush()?;
        debug!(columns = values.len(), "Wrote report row.");
        Ok(())
    }
}

/// The plain state data reporter, without any extra columns.
pub type StateDataReporter = PeriodicReporter<StateDataFields>;

impl StateDataReporter {
    pub fn new(
        sink: impl Into<OutputSink>,
        report_interval: u64,
        options: StateDataOptions,
    ) -> Result<Self, ReportError> {
        let separator = options.separator_byte();
        let append = options.append;
        let fields = StateDataFields::new(options)?;
        PeriodicReporter::with_fields(sink.into(), report_interval, fields, separator, append)
    }
}
