//! Common test utilities: a small soma-processes export
//!
//! Neuron 1 conveys along a three-part target chain (plain, layered, and an
//! unlabeled lyph reached through a chain hand-off) and a two-part source
//! chain whose `next` link loops back on itself. Neuron 2 conveys nothing.

#![allow(dead_code)]

use flatmap::GraphExport;
use serde_json::{json, Value};
use std::path::PathBuf;

pub const NEURON: &str = "ilxtr:neuron-type-1";
pub const IDLE_NEURON: &str = "ilxtr:neuron-type-2";

pub fn soma_processes_json() -> Value {
    json!({
        "nodes": [
            {"id": "ilxtr:neuron-type-1", "lbl": "sympathetic chain neuron"},
            {"id": "ilxtr:neuron-type-2", "lbl": "idle neuron"},
            {"id": "apinat:lnk-1", "lbl": "link 1"},
            {"id": "apinat:tgt", "lbl": "target end"},
            {"id": "apinat:src", "lbl": "source end"},
            {"id": "apinat:root-t", "lbl": "T root"},
            {"id": "apinat:root-s", "lbl": "S root"},
            {"id": "apinat:t1", "lbl": ""},
            {"id": "apinat:t2", "lbl": ""},
            {"id": "apinat:t3", "lbl": ""},
            {"id": "apinat:s1", "lbl": ""},
            {"id": "apinat:s2", "lbl": ""},
            {"id": "apinat:lyph-t1", "lbl": "trunk segment"},
            {"id": "apinat:lyph-t2", "lbl": "layer instance"},
            {"id": "apinat:lyph-t3", "lbl": ""},
            {"id": "apinat:lyph-s1", "lbl": "urethra segment"},
            {"id": "apinat:lyph-s2", "lbl": "bladder neck"},
            {"id": "apinat:wall-1", "lbl": "wall of trunk"},
            {"id": "apinat:clone-1", "lbl": "clone"},
            {"id": "apinat:lyph-sup", "lbl": "nerve fiber bundle"},
            {"id": "UBERON:0000407", "lbl": "sympathetic trunk"},
            {"id": "FMA:7643", "lbl": "Anterior root of first thoracic nerve"},
            {"id": "UBERON:0000057", "lbl": "urethra"},
            {"id": "owl:Nothing", "lbl": "Nothing"}
        ],
        "edges": [
            {"sub": "ilxtr:neuron-type-1", "pred": "apinatomy:conveys", "obj": "apinat:lnk-1"},
            {"sub": "apinat:lnk-1", "pred": "apinatomy:target", "obj": "apinat:tgt"},
            {"sub": "apinat:lnk-1", "pred": "apinatomy:source", "obj": "apinat:src"},
            {"sub": "apinat:tgt", "pred": "apinatomy:rootOf", "obj": "apinat:root-t"},
            {"sub": "apinat:src", "pred": "apinatomy:rootOf", "obj": "apinat:root-s"},

            {"sub": "apinat:tgt", "pred": "apinatomy:sourceOf", "obj": "apinat:t1"},
            {"sub": "apinat:t1", "pred": "apinatomy:fasciculatesIn", "obj": "apinat:lyph-t1"},
            {"sub": "apinat:lyph-t1", "pred": "apinatomy:external", "obj": "UBERON:0000407"},
            {"sub": "apinat:t1", "pred": "apinatomy:next", "obj": "apinat:t2"},
            {"sub": "apinat:t2", "pred": "apinatomy:fasciculatesIn", "obj": "apinat:lyph-t2"},
            {"sub": "apinat:lyph-t2", "pred": "apinatomy:layerIn", "obj": "apinat:wall-1"},
            {"sub": "apinat:lyph-t2", "pred": "apinatomy:cloneOf", "obj": "apinat:clone-1"},
            {"sub": "apinat:clone-1", "pred": "apinatomy:supertype", "obj": "apinat:lyph-sup"},
            {"sub": "apinat:lyph-sup", "pred": "apinatomy:external", "obj": "FMA:7643"},
            {"sub": "apinat:t2", "pred": "apinatomy:nextChainStartLevels", "obj": "apinat:t3"},
            {"sub": "apinat:t3", "pred": "apinatomy:fasciculatesIn", "obj": "apinat:lyph-t3"},

            {"sub": "apinat:src", "pred": "apinatomy:sourceOf", "obj": "apinat:s1"},
            {"sub": "apinat:s1", "pred": "apinatomy:fasciculatesIn", "obj": "apinat:lyph-s1"},
            {"sub": "apinat:lyph-s1", "pred": "apinatomy:external", "obj": "UBERON:0000057"},
            {"sub": "apinat:s1", "pred": "apinatomy:next", "obj": "apinat:s2"},
            {"sub": "apinat:s2", "pred": "apinatomy:fasciculatesIn", "obj": "apinat:lyph-s2"},
            {"sub": "apinat:s2", "pred": "apinatomy:next", "obj": "apinat:s1"},

            {"sub": "apinat:lyph-t1", "pred": "rdfs:subClassOf", "obj": "owl:Nothing"},
            {
                "sub": "ilxtr:neuron-type-1",
                "pred": "ilxtr:hasPart",
                "obj": "apinat:lyph-t1",
                "meta": {"owlType": ["http://purl.obolibrary.org/obo/BFO_0000051"]}
            }
        ]
    })
}

/// The raw export, structural edges included
pub fn raw_export() -> GraphExport {
    serde_json::from_value(soma_processes_json()).unwrap()
}

/// The export as the indexer expects it, structural edges removed
pub fn filtered_export() -> GraphExport {
    raw_export().without_structural_edges().0
}

/// Write the export to a temp dir; keep the returned dir alive while reading
pub fn write_export() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("soma-processes.json");
    std::fs::write(&path, soma_processes_json().to_string()).unwrap();
    (dir, path)
}
