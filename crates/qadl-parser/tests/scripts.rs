//! Parsing the demo scripts and the documented language behaviour.

use qadl_ir::{ClbitId, HardwareValue};
use qadl_parser::{ParseError, ParseOptions, parse, parse_with};

const TELEPORTATION: &str = include_str!("../../../demos/scripts/teleportation.qadl");
const GROVER: &str = include_str!("../../../demos/scripts/grover.qadl");
const MODULAR_QFT: &str = include_str!("../../../demos/scripts/modular_qft.qadl");

#[test]
fn test_teleportation_script() {
    let circuit = parse(TELEPORTATION).unwrap();

    assert_eq!(circuit.name(), "QuantumTeleportation");
    assert_eq!(circuit.num_qubits(), 3);
    assert_eq!(circuit.num_gates(), 4);
    assert_eq!(
        circuit.control_flow(),
        ["if (c0 == 1) { gate Z q2 }", "if (c1 == 1) { gate X q2 }"]
    );
    assert_eq!(circuit.num_clbits(), 2);
    assert_eq!(
        circuit.hardware().tokens("backend").unwrap(),
        ["qasm_simulator"]
    );
    // file-level annotations come before the circuit header
    assert!(circuit.annotations().is_empty());
}

#[test]
fn test_grover_script() {
    let circuit = parse(GROVER).unwrap();

    assert_eq!(circuit.annotations(), ["@target 11"]);
    let modules: Vec<_> = circuit.modules().keys().collect();
    assert_eq!(modules, ["Oracle", "Diffuser"]);
    assert_eq!(circuit.module("Oracle").unwrap().name(), "MarkEleven");
    assert_eq!(circuit.module("Diffuser").unwrap().num_gates(), 9);
    assert_eq!(circuit.total_gate_count(), 4 + 1 + 9);
    assert_eq!(circuit.error_correction(), ["error_correction repetition_code 3"]);
    assert_eq!(circuit.hardware().connectivity().unwrap(), ["q0-q1"]);
}

#[test]
fn test_modular_qft_script() {
    let circuit = parse(MODULAR_QFT).unwrap();

    let phases = circuit.module("ControlledPhases").unwrap();
    let inverse = phases.module("Inverse").unwrap();
    assert_eq!(inverse.name(), "InverseQFT");
    assert_eq!(inverse.gates()[0].operands(), ["a0", "a1", "a2"]);
    assert_eq!(circuit.module_depth(), 2);

    assert_eq!(circuit.control_flow(), ["while (c0 == 0) { gate Phase a0 }"]);
    assert_eq!(
        circuit.hardware().connectivity().unwrap(),
        ["linear", "a0-a1", "a1-a2", "a2-t0"]
    );
    assert_eq!(circuit.hardware().tokens("shots").unwrap(), ["2048"]);
}

#[test]
fn test_demo_scripts_parse_strictly() {
    for script in [TELEPORTATION, GROVER, MODULAR_QFT] {
        assert!(parse_with(script, &ParseOptions::strict()).is_ok());
    }
}

#[test]
fn test_parse_is_deterministic() {
    for script in [TELEPORTATION, GROVER, MODULAR_QFT] {
        assert_eq!(parse(script).unwrap(), parse(script).unwrap());
    }
}

#[test]
fn test_first_mention_clbit_order() {
    let source = "\
Circuit M {
    qubit q0
    qubit q1
    qubit q2
    measure q0 -> c1
    measure q1 -> c0
    measure q2 -> c1
}";
    let circuit = parse(source).unwrap();
    let bits: Vec<_> = circuit.classical_bits().iter().collect();

    assert_eq!(bits, [("c1", ClbitId(0)), ("c0", ClbitId(1))]);
    assert_eq!(circuit.num_measurements(), 3);
}

#[test]
fn test_gate_needs_an_operand() {
    let err = parse("Circuit A {\nqubit q0\ngate H\n}").unwrap_err();
    assert!(matches!(err, ParseError::MalformedStatement { line: 3, .. }));
}

#[test]
fn test_nested_module() {
    let source = "\
Circuit Top {
module Sub {
Circuit Inner {
qubit q0
}
}
}";
    let circuit = parse(source).unwrap();
    let inner = circuit.module("Sub").unwrap();

    assert_eq!(inner.name(), "Inner");
    assert_eq!(inner.num_qubits(), 1);
    assert_eq!(circuit.num_qubits(), 0);
}

#[test]
fn test_nested_module_error_line() {
    let source = "\
Circuit Top {
    module Sub {
        Circuit Inner {
            measure q0 c0
        }
    }
}";
    let err = parse(source).unwrap_err();

    match &err {
        ParseError::NestedParseFailure {
            module,
            header_line,
            source,
        } => {
            assert_eq!(module, "Sub");
            assert_eq!(*header_line, 2);
            assert!(matches!(
                **source,
                ParseError::MalformedStatement { line: 2, .. }
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.absolute_line(), Some(4));
}

#[test]
fn test_connectivity_block() {
    let source = "\
Circuit H {
    hardware {
        qubit_connectivity
            q0-q1
            q1-q2
    }
}";
    let circuit = parse(source).unwrap();

    assert_eq!(
        circuit.hardware().get("qubit_connectivity"),
        Some(&HardwareValue::Connectivity(vec![
            "q0-q1".to_string(),
            "q1-q2".to_string()
        ]))
    );
}

#[test]
fn test_prefix_keywords_are_not_statements() {
    for line in ["qubits q0", "gates H q0", "measurement q0 -> c0", "modules M {"] {
        let source = format!("Circuit A {{\n{line}\n}}");
        let err = parse(&source).unwrap_err();
        assert!(
            matches!(err, ParseError::UnrecognizedStatement { line: 2, .. }),
            "{line}: {err}"
        );
    }
}

#[test]
fn test_json_output_keeps_order() {
    let circuit = parse(GROVER).unwrap();
    let json = serde_json::to_string(circuit.modules()).unwrap();

    assert!(json.starts_with(r#"{"Oracle":{"name":"MarkEleven""#), "{json}");
    assert!(json.contains(r#"},"Diffuser":{"name":"Diffuser""#), "{json}");
}
