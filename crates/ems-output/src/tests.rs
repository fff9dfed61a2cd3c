//! Unit tests for ems-output.

#[cfg(test)]
mod helpers {
    use ems_core::NodeId;
    use ems_dispatch::{DispatchRecord, Outcome};
    use ems_graph::{RoadGraph, RoadGraphBuilder, RoadSegment};

    /// Two-node graph N2—N3 with weight 4 (delay-only segment).
    pub fn two_node_graph() -> (RoadGraph, NodeId, NodeId) {
        let mut b = RoadGraphBuilder::new();
        b.add_segment(&RoadSegment {
            start: "N2".into(),
            end: "N3".into(),
            distance: 0.0,
            traffic_delay: 4.0,
            speed_limit: None,
            start_coords: None,
            end_coords: None,
        });
        let g = b.build();
        let n2 = g.node_by_name("N2").unwrap();
        let n3 = g.node_by_name("N3").unwrap();
        (g, n2, n3)
    }

    pub fn dispatched_record(n2: NodeId, n3: NodeId) -> DispatchRecord {
        DispatchRecord {
            call_id: "C1".into(),
            call_type: "Cardiac".into(),
            call_location: n3,
            outcome: Outcome::Dispatched {
                vehicle: ems_core::VehicleId(0),
                label: "A2".into(),
                cost: 4.0,
                path: vec![n2, n3],
            },
            solver_ms: 0.0312,
        }
    }

    pub fn unassigned_record(n3: NodeId) -> DispatchRecord {
        DispatchRecord {
            call_id: "C9".into(),
            call_type: "Trauma".into(),
            call_location: n3,
            outcome: Outcome::Unassigned,
            solver_ms: 0.0184,
        }
    }
}

// ── Log line format ───────────────────────────────────────────────────────────

#[cfg(test)]
mod log {
    use crate::CallLogWriter;
    use super::helpers::{dispatched_record, two_node_graph, unassigned_record};

    fn written(f: impl FnOnce(&mut CallLogWriter<Vec<u8>>)) -> String {
        let mut w = CallLogWriter::new(Vec::new());
        f(&mut w);
        w.finish().unwrap();
        String::from_utf8(w.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn dispatched_line_schema() {
        let (g, n2, n3) = two_node_graph();
        let record = dispatched_record(n2, n3);
        let line = written(|w| w.write_record(&g, &record).unwrap());
        assert_eq!(
            line,
            "CallID=C1,CallType=Cardiac,CallLocation=N3,SelectedAmbulance=A2,\
             Route=N2->N3,TimeToLocation=4.000000,RouteExecutionTime(ms)=0.031200\n"
        );
    }

    #[test]
    fn unassigned_line_schema() {
        let (g, _, n3) = two_node_graph();
        let record = unassigned_record(n3);
        let line = written(|w| w.write_record(&g, &record).unwrap());
        assert_eq!(
            line,
            "CallID=C9,CallType=Trauma,CallLocation=N3,SelectedAmbulance=UNASSIGNED,\
             Route=-,TimeToLocation=-,RouteExecutionTime(ms)=0.018400\n"
        );
    }

    #[test]
    fn summary_line_schema() {
        let line = written(|w| w.write_summary(0.0248).unwrap());
        assert_eq!(
            line,
            "CallID=SUMMARY,CallType=-,CallLocation=-,SelectedAmbulance=-,\
             Route=-,TimeToLocation=-,RouteExecutionTime(ms)=0.024800\n"
        );
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = CallLogWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn file_backed_log_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ambulance_call_log.csv");

        let (g, n2, n3) = two_node_graph();
        let mut w = CallLogWriter::create(&path).unwrap();
        w.write_record(&g, &dispatched_record(n2, n3)).unwrap();
        w.write_summary(0.0312).unwrap();
        w.finish().unwrap();
        drop(w);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("CallID=C1,"));
        assert!(lines[1].starts_with("CallID=SUMMARY,"));
    }
}

// ── Observer bridge ───────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use ems_dispatch::{CallQueue, DispatchEngine, Fleet, PriorityTable};
    use ems_graph::UniformCostSolver;

    use crate::{CallLogObserver, CallLogWriter};
    use super::helpers::two_node_graph;

    #[test]
    fn logs_every_call_plus_summary() {
        let (g, n2, n3) = two_node_graph();
        let mut fleet = Fleet::new();
        fleet.register("A2", n2);

        let queue = CallQueue::assemble(
            [
                ("C1".into(), "Cardiac".into(), n3),
                ("C2".into(), "Cardiac".into(), n3),
            ],
            &PriorityTable::new(),
        );
        let mut engine = DispatchEngine::new(&g, UniformCostSolver, fleet);
        let mut obs = CallLogObserver::new(CallLogWriter::new(Vec::new()), &g);
        engine.run(&queue, &mut obs).unwrap();

        assert!(obs.take_error().is_none());
        let contents =
            String::from_utf8(obs.into_writer().into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3); // 2 calls + summary
        assert!(lines[0].starts_with("CallID=C1,"));
        assert!(lines[0].contains("SelectedAmbulance=A2"));
        assert!(lines[0].contains("TimeToLocation=4.000000"));
        assert!(lines[1].starts_with("CallID=C2,"));
        assert!(lines[2].starts_with("CallID=SUMMARY,"));
    }
}

// ── Console report ────────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use ems_dispatch::RunSummary;

    use crate::report::render_performance_summary;

    #[test]
    fn includes_average_when_dispatched() {
        let summary = RunSummary {
            calls_processed: 2,
            dispatched: 2,
            unassigned: 0,
            total_solver_ms: 0.5,
            mean_solver_ms: 0.25,
        };
        let text = render_performance_summary(&summary);
        assert!(text.starts_with("==== Performance Summary ====\n"));
        assert!(text.contains("Route-finding execution time: 0.5000 ms"));
        assert!(text.contains("Average route-finding time: 0.2500 ms"));
    }

    #[test]
    fn reports_no_dispatches() {
        let summary = RunSummary {
            calls_processed: 1,
            dispatched: 0,
            unassigned: 1,
            total_solver_ms: 0.0,
            mean_solver_ms: 0.0,
        };
        let text = render_performance_summary(&summary);
        assert!(text.contains("No calls were dispatched."));
        assert!(!text.contains("Average"));
    }
}
