use graphwalk::traversal;
use graphwalk::{GraphDescription, GraphError, VertexGraph};

const COMPLEX: &str = include_str!("fixtures/complex_graph.json");

#[test]
fn fixture_loads_and_answers_reference_queries() {
    let desc: GraphDescription<i32> = GraphDescription::from_json(COMPLEX).unwrap();
    assert_eq!(desc.vertex_count(), 10);

    VertexGraph::new(|mut graph| {
        let ids = desc.load_into(&mut graph).unwrap();
        let by_value = |v: i32| graph.find(&v);
        let v3 = by_value(3);

        assert_eq!(traversal::reachable(&graph, v3).len(), 9);
        assert_eq!(traversal::max(&graph, v3), 91);

        let leaves = traversal::leaves(&graph, v3);
        assert_eq!(leaves.iter().collect::<Vec<_>>(), vec![ids[8]]);

        let path = |from: i32, to: i32| {
            traversal::has_strictly_increasing_path(&graph, by_value(from), by_value(to))
        };
        assert_eq!(path(3, 91), Ok(true));
        assert_eq!(path(12, 7), Ok(false));
        assert_eq!(path(45, 56), Ok(false));
        assert_eq!(path(67, 78), Ok(false));
    });
}

#[test]
fn lookup_miss_surfaces_as_missing_endpoint() {
    let desc: GraphDescription<i32> = GraphDescription::from_json(COMPLEX).unwrap();

    VertexGraph::new(|mut graph| {
        desc.load_into(&mut graph).unwrap();
        // 1000 is not in the graph, so `find` yields `None`.
        let result =
            traversal::has_strictly_increasing_path(&graph, graph.find(&3), graph.find(&1000));
        assert!(matches!(result, Err(GraphError::MissingEndpoint(_))));
        assert_eq!(traversal::max(&graph, graph.find(&1000)), i32::MIN);
    });
}

#[test]
fn describe_then_load_reproduces_the_graph() {
    let fixture: GraphDescription<i32> = GraphDescription::from_json(COMPLEX).unwrap();

    let exported = VertexGraph::new(|mut graph| {
        fixture.clone().load_into(&mut graph).unwrap();
        graph.describe()
    });
    assert_eq!(exported, fixture);

    let json = exported.to_json().unwrap();
    let reparsed: GraphDescription<i32> = GraphDescription::from_json(&json).unwrap();
    assert_eq!(reparsed, fixture);
}

#[test]
fn null_and_missing_neighbors_are_uninitialised() {
    let json = r#"{ "vertices": [
        { "value": "root", "neighbors": [1, 2] },
        { "value": "implicit" },
        { "value": "explicit", "neighbors": null }
    ] }"#;
    let desc: GraphDescription<String> = GraphDescription::from_json(json).unwrap();
    assert!(desc.vertices[1].neighbors.is_none());
    assert!(desc.vertices[2].neighbors.is_none());

    VertexGraph::new(|mut graph| {
        let ids = desc.load_into(&mut graph).unwrap();
        assert!(!graph.has_edge_list(ids[1]));
        assert!(!graph.has_edge_list(ids[2]));

        let leaves = traversal::leaves(&graph, Some(ids[0]));
        let mut names: Vec<&str> = leaves.iter().map(|id| graph.value(id).as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["explicit", "implicit"]);
    });
}

#[test]
fn dangling_edge_is_rejected() {
    let json = r#"{ "vertices": [ { "value": 1, "neighbors": [0, 3] } ] }"#;
    let desc: GraphDescription<i32> = GraphDescription::from_json(json).unwrap();
    assert_eq!(
        desc.validate(),
        Err(GraphError::DanglingEdge {
            from: 0,
            to: 3,
            vertex_count: 1
        })
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(GraphDescription::<i32>::from_json(r#"{ "vertices": [ { "neighbors": [] } ] }"#).is_err());
}
