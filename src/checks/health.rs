//! `check-logstash health`: node status, heap, cpu and file descriptors

use crate::checks::Levels;
use crate::client::Client;
use crate::error::Error;
use crate::logstash::{decode_node_stats, NodeStats};
use crate::outcome::{Outcome, OutcomeBuilder, Summaries};
use crate::perfdata::Perfdata;
use crate::Status;

const SUMMARIES: Summaries = Summaries {
    ok: "Logstash is healthy",
    warning: "Logstash may not be healthy",
    critical: "Logstash is unhealthy",
    unknown: "Status unknown",
};

/// Thresholds for each health metric, all in percent
#[derive(Debug, Clone, PartialEq)]
pub struct HealthThresholds {
    pub file_descriptors: Levels,
    pub heap: Levels,
    pub cpu: Levels,
}

/// Fetch `/_node/stats` and evaluate it
pub fn run(client: &Client, thresholds: &HealthThresholds) -> Result<Outcome, Error> {
    let body = client.get(&["_node", "stats"])?;
    let stats = decode_node_stats(&body)?;
    evaluate(&stats, thresholds)
}

/// The node's own idea of its health
///
/// Logstash 6 doesn't report a status, answering at all means it's up.
fn node_status(stats: &NodeStats) -> Result<Status, Error> {
    let status = if stats.major_version == 6 {
        "green"
    } else {
        stats.status.as_deref().unwrap_or("")
    };
    match status {
        "green" => Ok(Status::Ok),
        "yellow" => Ok(Status::Warning),
        "red" => Ok(Status::Critical),
        other => {
            tracing::warn!(status = other, version = %stats.version, "unexpected node status");
            Err(Error::NodeStatus)
        }
    }
}

pub fn evaluate(stats: &NodeStats, thresholds: &HealthThresholds) -> Result<Outcome, Error> {
    let status = node_status(stats)?;
    let heap_percent = stats.jvm.mem.heap_used_percent;
    let fd_percent = stats.process.file_descriptors_percent();
    let cpu_percent = stats.process.cpu.percent;

    let mut outcome = OutcomeBuilder::new();
    outcome.sub_check(
        status,
        format!("Status is {}", stats.status.as_deref().unwrap_or("green")),
    );
    for &(levels, value, what) in &[
        (&thresholds.heap, heap_percent, "Heap usage"),
        (&thresholds.file_descriptors, fd_percent, "Open file descriptors"),
        (&thresholds.cpu, cpu_percent, "CPU usage"),
    ] {
        let sub_status = levels.classify(value);
        tracing::debug!(metric = what, value, status = %sub_status, "classified");
        outcome.sub_check(sub_status, format!("{} at {:.2}%", what, value));
    }

    outcome.perfdata(Perfdata::new("status", f64::from(status.code())));
    outcome.perfdata(
        Perfdata::new("process.cpu.percent", cpu_percent)
            .uom("%")
            .thresholds(&thresholds.cpu.warn, &thresholds.cpu.crit)
            .bounds(0.0, 100.0),
    );
    outcome.perfdata(
        Perfdata::new("jvm.mem.heap_used_percent", heap_percent)
            .uom("%")
            .thresholds(&thresholds.heap.warn, &thresholds.heap.crit)
            .bounds(0.0, 100.0),
    );
    outcome.perfdata(Perfdata::new(
        "jvm.threads.count",
        stats.jvm.threads.count as f64,
    ));
    outcome.perfdata(
        Perfdata::new(
            "process.open_file_descriptors",
            stats.process.open_file_descriptors,
        )
        .thresholds(
            &thresholds.file_descriptors.warn,
            &thresholds.file_descriptors.crit,
        )
        .bounds(0.0, stats.process.max_file_descriptors),
    );

    Ok(outcome.finish(&SUMMARIES))
}
