//! `check-logstash pipeline [reload|flow]`: per-pipeline checks
//!
//! All three read `/_node/stats/pipelines/<name>`. The name `/` (the
//! default) asks for every pipeline on the node. Pipelines are evaluated in
//! name order.

use chrono::{DateTime, FixedOffset};

use crate::checks::Levels;
use crate::client::Client;
use crate::error::Error;
use crate::logstash::{decode_pipeline_set, PipelineSet, Reloads};
use crate::outcome::{Outcome, OutcomeBuilder, Summaries};
use crate::perfdata::Perfdata;
use crate::Status;

const INFLIGHT_SUMMARIES: Summaries = Summaries {
    ok: "Inflight events alright",
    warning: "Inflight events may not be alright",
    critical: "Inflight events not alright",
    unknown: "Inflight events status unknown",
};

const RELOAD_SUMMARIES: Summaries = Summaries {
    ok: "Configuration successfully reloaded",
    warning: "Configuration reload may not be successful",
    critical: "Configuration reload failed",
    unknown: "Configuration reload status unknown",
};

const FLOW_SUMMARIES: Summaries = Summaries {
    ok: "Flow metrics alright",
    warning: "Flow metrics may not be alright",
    critical: "Flow metrics not alright",
    unknown: "Flow metrics status unknown",
};

/// API path for one pipeline, or all of them when `name` is `/`
///
/// Slashes inside `name` separate path segments, they are not escaped.
fn pipeline_path(name: &str) -> Vec<&str> {
    let mut segments = vec!["_node", "stats", "pipelines"];
    segments.extend(name.trim_matches('/').split('/'));
    segments
}

fn fetch(client: &Client, name: &str) -> Result<PipelineSet, Error> {
    let body = client.get(&pipeline_path(name))?;
    decode_pipeline_set(&body)
}

pub fn run_inflight(client: &Client, name: &str, levels: &Levels) -> Result<Outcome, Error> {
    Ok(evaluate_inflight(&fetch(client, name)?, levels))
}

pub fn run_reload(client: &Client, name: &str) -> Result<Outcome, Error> {
    Ok(evaluate_reload(&fetch(client, name)?))
}

pub fn run_flow(client: &Client, name: &str, levels: &Levels) -> Result<Outcome, Error> {
    Ok(evaluate_flow(&fetch(client, name)?, levels))
}

/// Events received but not yet sent on, per pipeline
pub fn evaluate_inflight(set: &PipelineSet, levels: &Levels) -> Outcome {
    let mut outcome = OutcomeBuilder::new();
    for (name, pipe) in &set.pipelines {
        let inflight = pipe.inflight_events();
        outcome.sub_check(
            levels.classify(inflight as f64),
            format!("inflight_events_{}:{}", name, inflight),
        );

        outcome.perfdata(
            Perfdata::new(format!("pipelines.{}.events.in", name), pipe.events.r#in as f64).uom("c"),
        );
        outcome.perfdata(
            Perfdata::new(format!("pipelines.{}.events.out", name), pipe.events.out as f64)
                .uom("c"),
        );
        outcome.perfdata(
            Perfdata::new(format!("inflight_events_{}", name), inflight as f64)
                .thresholds(&levels.warn, &levels.crit),
        );
        outcome.perfdata(Perfdata::new(
            format!("pipelines.{}.reloads.failures", name),
            pipe.reloads.failures as f64,
        ));
        outcome.perfdata(Perfdata::new(
            format!("pipelines.{}.reloads.successes", name),
            pipe.reloads.successes as f64,
        ));
    }
    outcome.finish(&INFLIGHT_SUMMARIES)
}

/// Whether the last configuration reload of each pipeline worked
///
/// Pipelines that never reloaded successfully are left out.
pub fn evaluate_reload(set: &PipelineSet) -> Outcome {
    let mut outcome = OutcomeBuilder::new();
    for (name, pipe) in &set.pipelines {
        let success = match pipe.reloads.last_success_timestamp.as_deref() {
            Some(ts) if !ts.is_empty() => ts,
            _ => continue,
        };
        match reload_failed_last(&pipe.reloads, success) {
            Ok(None) => outcome.sub_check(
                Status::Ok,
                format!(
                    "Configuration successfully reloaded for pipeline {} on {}",
                    name, success
                ),
            ),
            Ok(Some(failure)) => outcome.sub_check(
                Status::Critical,
                format!("Configuration reload for pipeline {} failed on {}", name, failure),
            ),
            Err(e) => {
                tracing::warn!(pipeline = %name, error = %e, "unparseable reload timestamp");
                outcome.sub_check(
                    Status::Unknown,
                    format!("Configuration reload for pipeline {} unknown", name),
                )
            }
        }
    }
    outcome.finish(&RELOAD_SUMMARIES)
}

/// The failure timestamp if the last reload attempt failed
///
/// Both timestamps must parse, a missing failure timestamp is an error too.
fn reload_failed_last<'a>(
    reloads: &'a Reloads,
    success: &str,
) -> Result<Option<&'a str>, chrono::ParseError> {
    let succeeded: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(success)?;
    let failure = reloads.last_failure_timestamp.as_deref().unwrap_or("");
    let failed = DateTime::parse_from_rfc3339(failure)?;
    Ok(if failed > succeeded { Some(failure) } else { None })
}

/// Queue backpressure per pipeline, with throughput as perfdata
pub fn evaluate_flow(set: &PipelineSet, levels: &Levels) -> Outcome {
    let mut outcome = OutcomeBuilder::new();
    for (name, pipe) in &set.pipelines {
        let flow = &pipe.flow;
        let backpressure = flow.queue_backpressure.current;
        outcome.sub_check(
            levels.classify(backpressure),
            format!("queue_backpressure_{}:{:.2}", name, backpressure),
        );

        outcome.perfdata(
            Perfdata::new(format!("pipelines.queue_backpressure_{}", name), backpressure)
                .thresholds(&levels.warn, &levels.crit),
        );
        for &(metric, value) in &[
            ("output_throughput", flow.output_throughput.current),
            ("input_throughput", flow.input_throughput.current),
            ("filter_throughput", flow.filter_throughput.current),
        ] {
            outcome.perfdata(Perfdata::new(format!("pipelines.{}.{}", name, metric), value));
        }
    }
    outcome.finish(&FLOW_SUMMARIES)
}
