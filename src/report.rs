//! Plain-text rendering of simulation results.

use crate::models::Process;
use crate::scheduler::{Policy, SimulationRun};
use crate::simulation::Comparison;

/// Section title for a policy.
fn title(policy: &Policy) -> &'static str {
    match policy {
        Policy::Fcfs => "FCFS",
        Policy::RoundRobin { .. } => "Round Robin",
        Policy::Priority => "Priority Scheduling",
    }
}

/// Renders the generated process set.
pub fn render_processes(processes: &[Process]) -> String {
    let mut out = String::from("\n*---- Generated Processes ----*\n");
    for p in processes {
        out.push_str(&format!(
            "Process {}: Arrival = {}, Burst = {}, Priority = {}\n",
            p.id, p.arrival_time, p.burst_time, p.priority
        ));
    }
    out
}

/// Renders one run: per-process lines, the slice trace for preemptive
/// policies, and the two averages.
pub fn render_run(run: &SimulationRun) -> String {
    let name = title(&run.policy);
    let mut out = match run.policy {
        Policy::Priority => format!("\n*---- {name} ----*\n"),
        _ => format!("\n*---- {name} Scheduling ----*\n"),
    };

    if let Some(quantum) = run.policy.quantum() {
        out.push_str(&format!("Time quantum: {quantum}\n"));
        for s in &run.timeline.slices {
            out.push_str(&format!(
                "Process {}: Time {}, Remaining Time = {}\n",
                s.process_id, s.end, s.remaining_after
            ));
        }
        out.push('\n');
    }

    for r in &run.records {
        let p = &r.process;
        let completion = r.completion_time.unwrap_or_default();
        match run.policy {
            Policy::Priority => out.push_str(&format!(
                "Process {}: Priority = {}, Burst Time = {}, Waiting Time = {}, Completion Time = {}\n",
                p.id, p.priority, p.burst_time, r.waiting_time, completion
            )),
            _ => out.push_str(&format!(
                "Process {}: Arrival = {}, Burst = {}, Waiting Time = {}, Completion Time = {}\n",
                p.id, p.arrival_time, p.burst_time, r.waiting_time, completion
            )),
        }
    }

    out.push_str(&format!(
        "\n{name} Average Waiting Time: {:.2}\n",
        run.metrics.average_waiting_time
    ));
    out.push_str(&format!(
        "{name} Average Turnaround Time: {:.2}\n",
        run.metrics.average_turnaround_time
    ));
    out
}

/// Renders a side-by-side summary of every run.
pub fn render_summary(comparison: &Comparison) -> String {
    let mut out = String::from("\n*---- Summary ----*\n");
    out.push_str(&format!(
        "{:<22} {:>10} {:>12} {:>10} {:>9} {:>6} {:>8}\n",
        "Policy", "Avg Wait", "Avg Turn", "Avg Resp", "Makespan", "Idle", "Util"
    ));
    out.push_str(&format!("{}\n", "-".repeat(83)));
    for run in &comparison.runs {
        let m = &run.metrics;
        out.push_str(&format!(
            "{:<22} {:>10.2} {:>12.2} {:>10.2} {:>9} {:>6} {:>7.1}%\n",
            run.policy.to_string(),
            m.average_waiting_time,
            m.average_turnaround_time,
            m.average_response_time,
            m.makespan,
            m.idle_ticks,
            m.cpu_utilization * 100.0
        ));
    }
    if let Some(best) = comparison.best_by_waiting() {
        out.push_str(&format!("\nLowest average waiting time: {}\n", best.policy));
    }
    out
}

/// Renders the full comparison: input set, each run, and the summary.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = render_processes(&comparison.processes);
    for run in &comparison.runs {
        out.push_str(&render_run(run));
    }
    out.push_str(&render_summary(comparison));
    out
}
