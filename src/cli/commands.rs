//! CLI command implementations: run one operation and render its result.
//!
//! Every `cmd_*` function returns engine errors to the caller untouched so the
//! menu can report them and carry on. Only output failures are fatal.

use std::io::Write;

use crate::engine::QueryEngine;
use crate::graph::SocialGraph;
use crate::types::{NetworkError, NetworkResult, OutputFormat};

/// Join names with single spaces, or `None` when there are none.
fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(" ")
    }
}

fn emit_json<W: Write>(out: &mut W, value: serde_json::Value) -> NetworkResult<()> {
    writeln!(out, "{}", value)?;
    Ok(())
}

/// Add one person.
pub fn cmd_add_person<W: Write>(
    graph: &mut SocialGraph,
    name: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    graph.add_person(name)?;
    match format {
        OutputFormat::Json => emit_json(out, serde_json::json!({"added": name})),
        OutputFormat::Text => {
            writeln!(out, "{} added to the network.", name)?;
            Ok(())
        }
    }
}

/// Connect two people.
pub fn cmd_add_connection<W: Write>(
    graph: &mut SocialGraph,
    a: &str,
    b: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let appended = graph.add_connection(a, b)?;
    match format {
        OutputFormat::Json => emit_json(
            out,
            serde_json::json!({"connected": [a, b], "appended": appended}),
        ),
        OutputFormat::Text => {
            if appended {
                writeln!(out, "Connection added between {} and {}.", a, b)?;
            } else {
                writeln!(out, "{} and {} are already connected.", a, b)?;
            }
            Ok(())
        }
    }
}

/// Disconnect two people.
pub fn cmd_remove_connection<W: Write>(
    graph: &mut SocialGraph,
    a: &str,
    b: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let removed = graph.remove_connection(a, b)?;
    match format {
        OutputFormat::Json => emit_json(
            out,
            serde_json::json!({"disconnected": [a, b], "removed": removed}),
        ),
        OutputFormat::Text => {
            writeln!(out, "Connection removed between {} and {}.", a, b)?;
            Ok(())
        }
    }
}

/// Remove a person and all their connections.
pub fn cmd_remove_person<W: Write>(
    graph: &mut SocialGraph,
    name: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let removed = graph.remove_person(name)?;
    match format {
        OutputFormat::Json => emit_json(
            out,
            serde_json::json!({"removed": removed.name, "connections": removed.connections}),
        ),
        OutputFormat::Text => {
            writeln!(out, "{} removed from the network.", removed.name)?;
            Ok(())
        }
    }
}

/// Display mutual friends of two people.
pub fn cmd_mutual<W: Write>(
    graph: &SocialGraph,
    a: &str,
    b: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let result = QueryEngine::new().mutual_friends(graph, a, b)?;
    match format {
        OutputFormat::Json => emit_json(out, serde_json::to_value(&result).unwrap_or_default()),
        OutputFormat::Text => {
            writeln!(
                out,
                "Mutual friends of {} and {}: {}",
                result.first,
                result.second,
                name_list(&result.mutual)
            )?;
            Ok(())
        }
    }
}

/// Suggest friends-of-friends.
pub fn cmd_suggest<W: Write>(
    graph: &SocialGraph,
    person: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let result = QueryEngine::new().suggest_friends(graph, person)?;
    match format {
        OutputFormat::Json => emit_json(out, serde_json::to_value(&result).unwrap_or_default()),
        OutputFormat::Text => {
            writeln!(
                out,
                "Friend suggestions for {}: {}",
                result.person,
                name_list(&result.suggestions)
            )?;
            Ok(())
        }
    }
}

/// Display a person's profile.
pub fn cmd_profile<W: Write>(
    graph: &SocialGraph,
    person: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let profile = QueryEngine::new().profile(graph, person)?;
    match format {
        OutputFormat::Json => emit_json(out, serde_json::to_value(&profile).unwrap_or_default()),
        OutputFormat::Text => {
            writeln!(out, "Profile of {}:", profile.name)?;
            writeln!(out, "Member since: {}", format_timestamp(profile.added_at))?;
            writeln!(out, "Direct connections: {}", name_list(&profile.connections))?;
            Ok(())
        }
    }
}

/// Find the shortest connection path.
pub fn cmd_path<W: Write>(
    graph: &SocialGraph,
    from: &str,
    to: &str,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let result = QueryEngine::new().shortest_path(graph, from, to)?;
    match format {
        OutputFormat::Json => emit_json(out, serde_json::to_value(&result).unwrap_or_default()),
        OutputFormat::Text => {
            writeln!(
                out,
                "Shortest path between {} and {}: {}",
                result.from,
                result.to,
                result.path.join(" -> ")
            )?;
            Ok(())
        }
    }
}

/// Display whole-network statistics.
pub fn cmd_stats<W: Write>(
    graph: &SocialGraph,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    let stats = QueryEngine::new().stats(graph);
    match format {
        OutputFormat::Json => emit_json(out, serde_json::to_value(&stats).unwrap_or_default()),
        OutputFormat::Text => {
            writeln!(out, "People: {}", stats.people)?;
            writeln!(out, "Connections: {}", stats.connections)?;
            writeln!(out, "Isolated people: {}", stats.isolated)?;
            writeln!(out, "Max connections: {}", stats.max_degree)?;
            Ok(())
        }
    }
}

/// Report an engine error without ending the session.
pub fn report_error<W: Write>(
    err: &NetworkError,
    format: OutputFormat,
    out: &mut W,
) -> NetworkResult<()> {
    match format {
        OutputFormat::Json => emit_json(
            out,
            serde_json::json!({
                "error": err.to_string(),
                "informational": err.is_informational(),
            }),
        ),
        OutputFormat::Text => {
            match err {
                NetworkError::UnknownNode(_) => writeln!(out, "{}. Please add them first.", err)?,
                _ => writeln!(out, "{}.", err)?,
            }
            Ok(())
        }
    }
}

fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let nsecs = ((micros % 1_000_000) * 1000) as u32;
    match chrono::DateTime::from_timestamp(secs, nsecs) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{}", micros),
    }
}
