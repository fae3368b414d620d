//! Serialization tests with KB export fixtures

use serde_json::{json, Value};

/// Export fixture in the shape written by the SciCrunch ApiNATOMY query
fn export_fixture() -> Value {
    json!({
        "nodes": [
            {"id": "UBERON:0000407", "lbl": "sympathetic trunk"},
            {"id": "ilxtr:neuron-1", "lbl": "neuron type 1"},
            {"id": "apinat:lyph-1", "lbl": ""},
            {"id": "apinat:lyph-2"},
            {"id": "owl:Nothing", "lbl": "Nothing"}
        ],
        "edges": [
            {"sub": "ilxtr:neuron-1", "pred": "apinatomy:conveys", "obj": "apinat:lyph-1"},
            {"sub": "apinat:lyph-1", "pred": "apinatomy:next", "obj": "apinat:lyph-2"},
            {"sub": "apinat:lyph-1", "pred": "rdfs:subClassOf", "obj": "owl:Nothing"},
            {
                "sub": "UBERON:0000407",
                "pred": "ilxtr:hasPart",
                "obj": "apinat:lyph-2",
                "meta": {"owlType": ["http://purl.obolibrary.org/obo/BFO_0000051"]}
            },
            {
                "sub": "UBERON:0000407",
                "pred": "apinatomy:external",
                "obj": "apinat:lyph-1",
                "meta": {"owlType": "owl:ObjectProperty"}
            }
        ]
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::graph::{Edge, GraphExport, Node, NodeId};

    #[test]
    fn node_id_serializes_as_string() {
        let id = NodeId::from_string("UBERON:0000407");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"UBERON:0000407\"");
    }

    #[test]
    fn node_id_deserializes_from_string() {
        let id: NodeId = serde_json::from_str("\"FMA:7643\"").unwrap();
        assert_eq!(id.as_str(), "FMA:7643");
    }

    #[test]
    fn node_without_lbl_deserializes() {
        let node: Node = serde_json::from_value(json!({"id": "apinat:x"})).unwrap();
        assert_eq!(node.lbl, None);
        assert_eq!(node.display_label(), "apinat:x");
    }

    #[test]
    fn empty_label_displays_as_id() {
        let node = Node::new("C", "");
        assert_eq!(node.label(), None);
        assert_eq!(node.display_label(), "C");

        let node = Node::new("A", "Alpha");
        assert_eq!(node.display_label(), "Alpha");
    }

    #[test]
    fn edge_meta_skipped_when_none() {
        let edge = Edge::new("a", "apinatomy:next", "b");
        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(json["sub"], "a");
        assert_eq!(json["pred"], "apinatomy:next");
        assert_eq!(json["obj"], "b");
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn can_deserialize_export_fixture() {
        let result: Result<GraphExport, _> = serde_json::from_value(export_fixture());
        assert!(result.is_ok(), "Failed to deserialize export fixture: {:?}", result.err());

        let export = result.unwrap();
        assert_eq!(export.nodes.len(), 5);
        assert_eq!(export.edges.len(), 5);
        assert_eq!(export.stats().edges, 5);
    }

    #[test]
    fn has_part_detected_in_list_and_string_forms() {
        let listed = Edge::new("a", "p", "b")
            .with_meta("owlType", json!(["http://purl.obolibrary.org/obo/BFO_0000051"]));
        let single = Edge::new("a", "p", "b")
            .with_meta("owlType", json!("http://purl.obolibrary.org/obo/BFO_0000051"));
        let other = Edge::new("a", "p", "b").with_meta("owlType", json!("owl:ObjectProperty"));

        assert!(listed.is_has_part());
        assert!(single.is_has_part());
        assert!(!other.is_has_part());
        assert!(!Edge::new("a", "p", "b").is_has_part());
    }

    #[test]
    fn structural_filter_drops_nothing_and_has_part() {
        let export: GraphExport = serde_json::from_value(export_fixture()).unwrap();
        let (filtered, report) = export.without_structural_edges();

        assert_eq!(report.raw, 5);
        assert_eq!(report.after_nothing, 4);
        assert_eq!(report.after_has_part, 3);
        assert!(filtered.edges.iter().all(|e| !e.is_structural()));
        // nodes are never filtered
        assert_eq!(filtered.nodes.len(), 5);
    }

    #[test]
    fn export_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soma-processes.json");
        std::fs::write(&path, export_fixture().to_string()).unwrap();

        let export = GraphExport::from_path(&path).unwrap();
        assert_eq!(export.nodes[0].id.as_str(), "UBERON:0000407");
    }

    #[test]
    fn export_from_missing_path_is_io_error() {
        let err = GraphExport::from_path("/nonexistent/export.json").unwrap_err();
        assert!(matches!(err, crate::FlatmapError::Io(_)));
    }
}
