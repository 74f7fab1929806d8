use std::error::Error;
use std::io::{self, Write};

use serde::Serialize;

use crate::run::RunReport;

/// Print `data` as pretty JSON when `json` is set, otherwise hand it to
/// `display_fn`.
pub fn print_output<T: Serialize>(
    data: &T,
    json: bool,
    display_fn: impl FnOnce(&T) -> io::Result<()>,
) -> Result<(), Box<dyn Error>> {
    if json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data)?;
    }
    Ok(())
}

pub fn print_report(report: &RunReport, json: bool) -> Result<(), Box<dyn Error>> {
    print_output(report, json, |r| {
        let stdout = io::stdout();
        write_report(&mut stdout.lock(), r)
    })
}

/// The human-readable report: one block per search, each with its outcome,
/// timing and, when a path was found, the map with the path drawn on it.
pub fn write_report(out: &mut impl Write, report: &RunReport) -> io::Result<()> {
    writeln!(out, "Graph Search Algorithms Start")?;
    writeln!(
        out,
        "Map: {} ({}x{}, {} edges)",
        report.map, report.side, report.side, report.connectivity
    )?;
    if let Some(seed) = report.seed {
        writeln!(out, "Seed: {seed}")?;
    }
    writeln!(out, "Start: node {}  Goal: node {}", report.start, report.goal)?;

    for s in &report.searches {
        writeln!(out)?;
        writeln!(out, "{} search", s.kind.name())?;
        if s.found {
            writeln!(out, "{}: Goal found at node {}", s.kind, report.goal)?;
        } else {
            writeln!(out, "{}: Goal not found!", s.kind)?;
        }
        writeln!(out, "Time taken for search: {} µs", s.elapsed_us)?;
        writeln!(
            out,
            "Nodes discovered: {}  expanded: {}",
            s.discovered, s.expanded
        )?;
        if let Some(path) = &s.path {
            writeln!(out, "Path ({} steps): {path}", path.edge_count())?;
        }
        if let Some(view) = &s.view {
            write!(out, "{view}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Graph Search Algorithms End")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::SearchReport;
    use gridwalk_map::Connectivity;
    use gridwalk_search::{Path, SearchKind};

    fn report(found: bool) -> RunReport {
        RunReport {
            map: "m.txt".into(),
            seed: None,
            side: 2,
            connectivity: Connectivity::Forward,
            start: 0,
            goal: 3,
            start_at: None,
            goal_at: None,
            searches: vec![SearchReport {
                kind: SearchKind::BreadthFirst,
                found,
                path: found.then(|| Path::try_from(vec![0, 1, 3]).unwrap()),
                discovered: 4,
                expanded: 3,
                elapsed_us: 12,
                view: None,
            }],
        }
    }

    fn render(report: &RunReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn found_report() {
        let text = render(&report(true));
        assert!(text.starts_with("Graph Search Algorithms Start\n"));
        assert!(text.contains("BFS: Goal found at node 3\n"));
        assert!(text.contains("Time taken for search: 12 µs\n"));
        assert!(text.contains("Path (2 steps): 0 -> 1 -> 3\n"));
        assert!(text.ends_with("Graph Search Algorithms End\n"));
    }

    #[test]
    fn not_found_report() {
        let text = render(&report(false));
        assert!(text.contains("BFS: Goal not found!\n"));
        assert!(!text.contains("Path"));
    }

    #[test]
    fn json_shape() {
        let value = serde_json::to_value(report(true)).unwrap();
        assert_eq!(value["connectivity"], "forward");
        assert_eq!(value["searches"][0]["kind"], "breadth-first");
        assert_eq!(value["searches"][0]["path"], serde_json::json!([0, 1, 3]));
        assert!(value.get("seed").is_none());
        assert!(value["searches"][0].get("view").is_none());
    }
}
