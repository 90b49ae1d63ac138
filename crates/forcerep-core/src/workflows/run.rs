use crate::core::simulation::Dynamics;
use crate::report::error::ReportError;
use crate::report::writer::Reporter;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub first_step: u64,
    pub last_step: u64,
    pub reports_written: usize,
}

/// Advances `simulation` by `steps`, firing each reporter whenever it is due.
///
/// The engine is stepped in chunks that end exactly on the next step any
/// reporter wants, so no reporter is ever skipped or fired early. A single
/// state snapshot is shared by all reporters due at the same step.
///
/// # Errors
///
/// Stops at the first failure from stepping, state retrieval or any reporter;
/// reporters already fired at that step keep their rows.
#[instrument(skip_all, name = "run_workflow", fields(steps = steps))]
pub fn run<S: Dynamics>(
    simulation: &mut S,
    reporters: &mut [&mut dyn Reporter],
    steps: u64,
) -> Result<RunSummary, ReportError> {
    let first_step = simulation.current_step();
    let end_step = first_step.saturating_add(steps);
    info!(
        first_step,
        end_step,
        reporters = reporters.len(),
        "Starting simulation run."
    );

    let mut reports_written = 0;
    while simulation.current_step() < end_step {
        let current = simulation.current_step();
        let remaining = end_step - current;
        let next_reports: Vec<u64> = reporters
            .iter()
            .map(|reporter| reporter.describe_next_report(current))
            .collect();
        let advance = next_reports
            .iter()
            .copied()
            .min()
            .map_or(remaining, |next| next.min(remaining));

        simulation.step(advance)?;

        let due: Vec<usize> = next_reports
            .iter()
            .enumerate()
            .filter(|&(_, &next)| next == advance)
            .map(|(index, _)| index)
            .collect();
        if due.is_empty() {
            continue;
        }

        let state = simulation.state()?;
        debug!(step = state.step, due = due.len(), "Firing reporters.");
        for index in due {
            reporters[index].report(&*simulation, &state)?;
            reports_written += 1;
        }
    }

    let summary = RunSummary {
        first_step,
        last_step: simulation.current_step(),
        reports_written,
    };
    info!(
        last_step = summary.last_step,
        reports_written, "Simulation run finished."
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::labels::labels;
    use crate::core::simulation::SimulationError;
    use crate::core::units::Energy;
    use crate::report::sink::OutputSink;
    use crate::report::state_data::StateDataOptions;
    use crate::report::table::ReportTable;
    use crate::report::{ForceGroupReporter, StateDataReporter};
    use crate::test_utils::{FakeSimulation, SharedBuffer};
    use std::fs::File;
    use tracing_subscriber::{fmt, prelude::*};

    fn simulation() -> FakeSimulation {
        FakeSimulation::new(vec![
            Energy::kilojoules_per_mole(12.5),
            Energy::kilojoules_per_mole(3.2),
        ])
    }

    fn step_column(buffer: &SharedBuffer) -> Vec<f64> {
        ReportTable::from_reader(buffer.contents().as_bytes(), ',')
            .unwrap()
            .column("Step")
            .unwrap()
    }

    #[test]
    fn steps_in_chunks_ending_on_each_report() {
        let slow_buffer = SharedBuffer::default();
        let fast_buffer = SharedBuffer::default();
        let mut slow = ForceGroupReporter::new(
            OutputSink::writer(slow_buffer.clone()),
            100,
            labels(["bonds", "angles"]),
            StateDataOptions::new().step(true),
        )
        .unwrap();
        let mut fast = StateDataReporter::new(
            OutputSink::writer(fast_buffer.clone()),
            30,
            StateDataOptions::new().step(true),
        )
        .unwrap();
        let mut sim = simulation();

        let summary = run(&mut sim, &mut [&mut slow, &mut fast], 200).unwrap();

        assert_eq!(sim.step_calls, vec![30, 30, 30, 10, 20, 30, 30, 20]);
        assert_eq!(
            summary,
            RunSummary {
                first_step: 0,
                last_step: 200,
                reports_written: 8
            }
        );
        assert_eq!(step_column(&slow_buffer), vec![100.0, 200.0]);
        assert_eq!(
            step_column(&fast_buffer),
            vec![30.0, 60.0, 90.0, 120.0, 150.0, 180.0]
        );
    }

    #[test]
    fn run_resumes_cadence_from_current_step() {
        let buffer = SharedBuffer::default();
        let mut reporter = StateDataReporter::new(
            OutputSink::writer(buffer.clone()),
            50,
            StateDataOptions::new().step(true),
        )
        .unwrap();
        let mut sim = simulation().at_step(120);

        run(&mut sim, &mut [&mut reporter], 100).unwrap();

        assert_eq!(sim.step, 220);
        assert_eq!(step_column(&buffer), vec![150.0, 200.0]);
    }

    #[test]
    fn run_without_reporters_steps_once() {
        let mut sim = simulation();
        let summary = run(&mut sim, &mut [], 500).unwrap();
        assert_eq!(sim.step_calls, vec![500]);
        assert_eq!(summary.reports_written, 0);
    }

    #[test]
    fn step_count_past_u64_range_saturates_at_the_last_step() {
        let mut sim = simulation().at_step(10);
        let summary = run(&mut sim, &mut [], u64::MAX).unwrap();
        assert_eq!(sim.step_calls, vec![u64::MAX - 10]);
        assert_eq!(summary.last_step, u64::MAX);
    }

    #[test]
    fn failing_reporter_aborts_the_run() {
        let buffer = SharedBuffer::default();
        let mut reporter = ForceGroupReporter::new(
            OutputSink::writer(buffer.clone()),
            100,
            labels(["bonds", "angles", "unregistered"]),
            StateDataOptions::new().step(true),
        )
        .unwrap();
        let mut sim = simulation();

        let result = run(&mut sim, &mut [&mut reporter], 1000);

        assert!(matches!(
            result,
            Err(ReportError::Simulation(SimulationError::UnknownForceGroup { group: 2 }))
        ));
        assert_eq!(sim.step, 100);
        assert_eq!(buffer.contents().lines().count(), 1);
    }

    #[test]
    fn run_emits_start_and_finish_logs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("run.log");
        let file = File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        );

        tracing::subscriber::with_default(subscriber, || {
            let mut sim = simulation();
            run(&mut sim, &mut [], 10).unwrap();
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Starting simulation run."));
        assert!(content.contains("Simulation run finished."));
        assert!(content.contains("INFO"));
    }
}
