//! Tests for the Edmonds-Karp maximum-flow engine

#[cfg(test)]
mod tests {
    use flowtile::graph::{FlowGraph, VertexId, max_flow};

    fn arc(graph: &mut FlowGraph, from: VertexId, to: VertexId, capacity: u32) {
        graph.set_capacity(from, to, capacity);
    }

    #[test]
    fn test_single_chain_carries_one_unit() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let sink = graph.add_vertex();

        arc(&mut graph, source, a, 1);
        arc(&mut graph, a, b, 1);
        arc(&mut graph, b, sink, 1);

        assert_eq!(max_flow(&graph, source, sink), 1);
    }

    #[test]
    fn test_parallel_routes_add_up() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();
        let upper = graph.add_vertex();
        let lower = graph.add_vertex();
        let sink = graph.add_vertex();

        arc(&mut graph, source, upper, 1);
        arc(&mut graph, source, lower, 1);
        arc(&mut graph, upper, sink, 1);
        arc(&mut graph, lower, sink, 1);

        assert_eq!(max_flow(&graph, source, sink), 2);
    }

    // The cross edge tempts the first augmentation down a route that must be
    // partially undone through the automatically inserted reverse edges
    #[test]
    fn test_cross_edge_does_not_reduce_the_flow() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();
        let upper = graph.add_vertex();
        let lower = graph.add_vertex();
        let sink = graph.add_vertex();

        arc(&mut graph, source, upper, 1);
        arc(&mut graph, source, lower, 1);
        arc(&mut graph, upper, lower, 1);
        arc(&mut graph, upper, sink, 1);
        arc(&mut graph, lower, sink, 1);

        assert_eq!(max_flow(&graph, source, sink), 2);
    }

    #[test]
    fn test_shared_bottleneck_limits_the_flow() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();
        let left = graph.add_vertex();
        let right = graph.add_vertex();
        let middle = graph.add_vertex();
        let sink = graph.add_vertex();

        arc(&mut graph, source, left, 1);
        arc(&mut graph, source, right, 1);
        arc(&mut graph, left, middle, 1);
        arc(&mut graph, right, middle, 1);
        arc(&mut graph, middle, sink, 1);

        assert_eq!(max_flow(&graph, source, sink), 1);
    }

    #[test]
    fn test_unreachable_sink_carries_nothing() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();
        let stranded = graph.add_vertex();
        let sink = graph.add_vertex();

        arc(&mut graph, source, stranded, 1);

        assert_eq!(max_flow(&graph, source, sink), 0);
    }

    // The engine works on a residual clone; the caller's graph is read-only
    #[test]
    fn test_original_graph_is_never_mutated() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();
        let middle = graph.add_vertex();
        let sink = graph.add_vertex();

        arc(&mut graph, source, middle, 1);
        arc(&mut graph, middle, sink, 1);

        assert_eq!(max_flow(&graph, source, sink), 1);

        assert_eq!(graph.capacity(source, middle), Some(1));
        assert_eq!(graph.capacity(middle, sink), Some(1));
        // No reverse edges leak back into the original
        assert_eq!(graph.capacity(middle, source), None);
        assert_eq!(graph.capacity(sink, middle), None);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_flow_is_bounded_by_source_and_sink_degree() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let c = graph.add_vertex();
        let sink = graph.add_vertex();

        arc(&mut graph, source, a, 1);
        arc(&mut graph, source, b, 1);
        arc(&mut graph, source, c, 1);
        arc(&mut graph, a, sink, 1);

        let flow = max_flow(&graph, source, sink);
        let source_degree = graph.neighbors(source).count();
        let sink_degree = graph
            .vertex_ids()
            .filter(|&vertex| graph.capacity(vertex, sink).is_some())
            .count();

        assert!(flow as usize <= source_degree);
        assert!(flow as usize <= sink_degree);
        assert_eq!(flow, 1);
    }

    #[test]
    #[should_panic(expected = "outside the graph")]
    fn test_foreign_vertex_aborts_the_computation() {
        let mut graph = FlowGraph::new();
        let source = graph.add_vertex();

        let mut other = FlowGraph::new();
        let _ = other.add_vertex();
        let foreign = other.add_vertex();

        let _ = max_flow(&graph, source, foreign);
    }
}
