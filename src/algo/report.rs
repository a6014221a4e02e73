use tracing::{debug, info_span, warn};

use super::*;
use crate::utils::{CancellationToken, Matrix};

/// Outcome of the Hamiltonian part of an [`Analysis`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianReport {
    /// `Path` if a Hamiltonian path exists, else `Cycle` if a Hamiltonian cycle exists
    pub kind: Option<TrailKind>,
    pub path: Option<Vec<Node>>,
    pub cycle: Option<Vec<Node>>,
    /// *false* if the candidate budget ran out before every search finished
    pub complete: bool,
}

/// Everything computed for a graph by [`Analysis::run`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphReport {
    pub nodes: Vec<Node>,
    pub number_of_edges: NumEdges,
    pub directed: bool,
    pub weighted: bool,
    pub connected: bool,
    pub adjacency_matrix: AdjacencyMatrix,
    pub path_matrix: Matrix,
    pub eulerian: Option<EulerianStart>,
    pub eulerian_path: Option<Vec<Node>>,
    pub eulerian_cycle: Option<Vec<Node>>,
    pub hamiltonian: HamiltonianReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_path: Option<ShortestPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_flow: Option<Weight>,
    pub spanning_tree: SpanningTree,
}

/// Runs every analysis on a graph at once.
///
/// Shortest path and maximum flow need endpoints and are only computed if configured.
/// The Hamiltonian searches share an optional candidate budget and cancellation token.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = Graph::from_edges([(0, 1, 2.0), (0, 2, 6.0), (1, 2, 3.0)], true);
/// let report = Analysis::new()
///     .shortest_path(0, 2)
///     .max_flow(0, 2)
///     .run(&graph)
///     .unwrap();
///
/// assert!(report.connected);
/// assert_eq!(report.shortest_path.unwrap().distance, 5.0);
/// assert_eq!(report.max_flow, Some(8.0));
/// assert_eq!(report.hamiltonian.path, Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    shortest_path: Option<(Node, Node)>,
    max_flow: Option<(Node, Node)>,
    hamiltonian_budget: Option<u64>,
    cancellation: Option<CancellationToken>,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a shortest path `from -> to`
    pub fn set_shortest_path(&mut self, from: Node, to: Node) {
        self.shortest_path = Some((from, to));
    }

    /// Requests a shortest path `from -> to`
    pub fn shortest_path(mut self, from: Node, to: Node) -> Self {
        self.set_shortest_path(from, to);
        self
    }

    /// Requests a maximum flow `source -> sink`
    pub fn set_max_flow(&mut self, source: Node, sink: Node) {
        self.max_flow = Some((source, sink));
    }

    /// Requests a maximum flow `source -> sink`
    pub fn max_flow(mut self, source: Node, sink: Node) -> Self {
        self.set_max_flow(source, sink);
        self
    }

    /// Limits each Hamiltonian search to this many candidates
    pub fn set_hamiltonian_budget(&mut self, budget: u64) {
        self.hamiltonian_budget = Some(budget);
    }

    /// Limits each Hamiltonian search to this many candidates
    pub fn hamiltonian_budget(mut self, budget: u64) -> Self {
        self.set_hamiltonian_budget(budget);
        self
    }

    /// Aborts the Hamiltonian searches once the token is cancelled
    pub fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    /// Aborts the Hamiltonian searches once the token is cancelled
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.set_cancellation(token);
        self
    }

    fn hamiltonian_search(&self, kind: TrailKind) -> HamiltonianSearch {
        let mut search = HamiltonianSearch::new(kind);
        if let Some(budget) = self.hamiltonian_budget {
            search.set_max_candidates(budget);
        }
        if let Some(token) = &self.cancellation {
            search.set_cancellation(token.clone());
        }
        search
    }

    fn hamiltonian(&self, graph: &Graph) -> Result<HamiltonianReport, GraphError> {
        let mut report = HamiltonianReport {
            complete: true,
            ..Default::default()
        };

        for kind in [TrailKind::Path, TrailKind::Cycle] {
            let trail = match self.hamiltonian_search(kind).run(graph) {
                Ok(trail) => trail,
                Err(GraphError::BudgetExhausted { candidates }) => {
                    warn!(?kind, candidates, "hamiltonian search incomplete");
                    report.complete = false;
                    None
                }
                Err(err) => return Err(err),
            };

            match kind {
                TrailKind::Path => report.path = trail,
                TrailKind::Cycle => report.cycle = trail,
            }
        }

        report.kind = if report.path.is_some() {
            Some(TrailKind::Path)
        } else if report.cycle.is_some() {
            Some(TrailKind::Cycle)
        } else {
            None
        };

        Ok(report)
    }

    /// Runs the configured analysis.
    ///
    /// # Errors
    /// - errors of [`ShortestPaths::shortest_path`] and [`MaxFlow::max_flow`] for the
    ///   configured endpoints,
    /// - [`GraphError::Cancelled`] if the token fired during a Hamiltonian search.
    ///
    /// An exhausted Hamiltonian budget is not an error; it marks the Hamiltonian part as incomplete.
    pub fn run(&self, graph: &Graph) -> Result<GraphReport, GraphError> {
        let _span = info_span!("analysis", nodes = graph.count(), edges = graph.number_of_edges())
            .entered();

        let shortest_path = match self.shortest_path {
            Some((from, to)) => graph.shortest_path(from, to)?,
            None => None,
        };

        let max_flow = self
            .max_flow
            .map(|(source, sink)| graph.max_flow(source, sink))
            .transpose()?;

        let report = GraphReport {
            nodes: graph.nodes(),
            number_of_edges: graph.number_of_edges(),
            directed: graph.is_directed(),
            weighted: graph.is_weighted(),
            connected: graph.is_connected(),
            adjacency_matrix: graph.adjacency_matrix(),
            path_matrix: graph.path_matrix(),
            eulerian: graph.is_eulerian(),
            eulerian_path: graph.eulerian_trail(TrailKind::Path),
            eulerian_cycle: graph.eulerian_trail(TrailKind::Cycle),
            hamiltonian: self.hamiltonian(graph)?,
            shortest_path,
            max_flow,
            spanning_tree: graph.minimum_spanning_tree(),
        };

        debug!(
            connected = report.connected,
            eulerian = ?report.eulerian,
            hamiltonian = ?report.hamiltonian.kind,
            "analysis done"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle_report() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0)], false);
        let report = Analysis::new().run(&graph).unwrap();

        assert_eq!(report.nodes, vec![0, 1, 2]);
        assert_eq!(report.number_of_edges, 3);
        assert!(!report.weighted);
        assert!(report.connected);
        assert_eq!(report.eulerian_cycle, Some(vec![0, 1, 2, 0]));
        assert_eq!(report.eulerian_path, report.eulerian_cycle);
        assert_eq!(report.hamiltonian.kind, Some(TrailKind::Path));
        assert_eq!(report.hamiltonian.cycle, Some(vec![0, 1, 2, 0]));
        assert!(report.hamiltonian.complete);
        assert_eq!(report.spanning_tree.tree.len(), 2);
        assert_eq!(report.shortest_path, None);
        assert_eq!(report.max_flow, None);
    }

    #[test]
    fn budget_marks_incomplete() {
        let star = Graph::from_edges([(0, 1), (0, 2), (0, 3)], false);
        let report = Analysis::new().hamiltonian_budget(5).run(&star).unwrap();
        assert!(!report.hamiltonian.complete);
        assert_eq!(report.hamiltonian.kind, None);
    }

    #[test]
    fn errors_propagate() {
        let graph = Graph::from_edges([(0, 1)], true);
        assert!(matches!(
            Analysis::new().max_flow(0, 4).run(&graph),
            Err(GraphError::UnknownNode(4))
        ));

        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(
            Analysis::new().cancellation(token).run(&graph),
            Err(GraphError::Cancelled { .. })
        ));
    }

    #[test]
    fn json_shape() {
        let graph = Graph::from_edges([(0, 1, 2.0)], true);
        let report = Analysis::new().run(&graph).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["adjacency_matrix"], serde_json::json!([[false, 2.0], [false, false]]));
        assert_eq!(json["eulerian"]["kind"], "path");
        assert!(json.get("shortest_path").is_none());

        let back: GraphReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
