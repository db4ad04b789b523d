use toffoli_verify::config::{U3Angles, VerifyConfig};
use toffoli_verify::quantum::QuantumGate;
use toffoli_verify::task::{build_reference_toffoli, build_task_circuit, verify, QUBIT_COUNT};
use toffoli_verify::verification::{
    exit_code, global_phase_equivalent, truth_table, EXIT_ERROR, EXIT_FAIL, EXIT_PASS,
};
use toffoli_verify::QuantumError;

const TOFFOLI_TABLE: [(&str, &str); 8] = [
    ("000", "000"),
    ("001", "001"),
    ("010", "010"),
    ("011", "011"),
    ("100", "100"),
    ("101", "101"),
    ("110", "111"),
    ("111", "110"),
];

#[test]
fn test_task_circuit_layout() {
    let task = build_task_circuit(U3Angles::HADAMARD, U3Angles::T_DAGGER).unwrap();
    assert_eq!(task.qubit_count(), QUBIT_COUNT);
    assert_eq!(task.gate_count(), 15);

    // Both black boxes sit on the target qubit
    let (first, first_qubits) = &task.gates()[0];
    let (second, second_qubits) = &task.gates()[11];
    assert_eq!(first_qubits, &vec![2]);
    assert_eq!(second_qubits, &vec![2]);
    assert!(first.name().starts_with("U3"));
    assert!(second.name().starts_with("U3"));
}

#[test]
fn test_canonical_angles_reproduce_toffoli() {
    let task = build_task_circuit(U3Angles::HADAMARD, U3Angles::T_DAGGER).unwrap();
    let reference = build_reference_toffoli().unwrap();

    assert!(global_phase_equivalent(&task.unitary().unwrap(), &reference.unitary().unwrap(), 1e-10).unwrap());

    let table = truth_table(&task).unwrap();
    let rows: Vec<(&str, &str)> = table.iter().collect();
    assert_eq!(rows, TOFFOLI_TABLE.to_vec());
    assert!(table.ambiguous_inputs().is_empty());
}

#[test]
fn test_verify_passes_with_default_config() {
    let report = verify(&VerifyConfig::default()).unwrap();

    assert!(report.unitary_equivalent);
    assert!(report.tables_match);
    assert!(report.passed());

    let (re, im) = report.global_phase.unwrap();
    assert!((re - 1.0).abs() < 1e-10);
    assert!(im.abs() < 1e-10);

    assert_eq!(
        report.summary_line(),
        "PASS: With U3_1 = U3(π/2, 0, π) and U3_2 = U3(0, 0, -π/4), the circuit equals CCX."
    );
}

#[test]
fn test_report_text_sections() {
    let text = verify(&VerifyConfig::default()).unwrap().to_string();

    let sections = [
        "=== Unitary Equivalence Check ===",
        "Equivalent to Toffoli up to global phase: true",
        "=== Truth Table — Task Circuit ===",
        "=== Truth Table — Reference CCX ===",
        "Truth tables identical: true",
        "=== Summary ===",
        "PASS: ",
    ];
    let mut cursor = 0;
    for section in sections {
        let found = text[cursor..]
            .find(section)
            .unwrap_or_else(|| panic!("missing or out of order: {}", section));
        cursor += found + section.len();
    }

    assert!(text.contains("Input(q0q1q2) -> Output(q0q1q2)\n    000 -> 000\n"));
    assert!(text.contains("    110 -> 111\n    111 -> 110\n"));
    assert!(text.trim_end().lines().last().unwrap().starts_with("PASS: "));
}

#[test]
fn test_swapped_angles_fail() {
    let config = VerifyConfig {
        first: U3Angles::T_DAGGER,
        second: U3Angles::HADAMARD,
        ..VerifyConfig::default()
    };
    let report = verify(&config).unwrap();

    assert!(!report.unitary_equivalent);
    assert!(report.global_phase.is_none());
    assert!(!report.tables_match);
    assert!(!report.passed());
    assert!(report.summary_line().starts_with("FAIL: "));

    // The target qubit picks up a spurious flip when only q0 is set
    assert_eq!(report.task_table.output("100"), Some("101"));
    assert_eq!(report.reference_table.output("100"), Some("100"));
}

#[test]
fn test_unitary_check_catches_what_truth_table_misses() {
    // With an identity in the second box the classical behavior still looks
    // like CCX, but the operator is different
    let config = VerifyConfig {
        second: U3Angles::new(0.0, 0.0, 0.0),
        ..VerifyConfig::default()
    };
    let report = verify(&config).unwrap();

    assert!(report.tables_match);
    assert!(!report.unitary_equivalent);
    assert!(!report.passed());
    assert!(report.to_string().contains("Truth tables identical: true"));
    assert!(report.to_string().contains("FAIL: "));
}

#[test]
fn test_strict_dominance_rejects_superposed_outputs() {
    let config = VerifyConfig {
        first: U3Angles::T_DAGGER,
        second: U3Angles::HADAMARD,
        min_dominance: Some(0.99),
        ..VerifyConfig::default()
    };
    assert!(matches!(
        verify(&config),
        Err(QuantumError::AmbiguousOutcome { .. })
    ));

    let config = VerifyConfig {
        min_dominance: Some(0.99),
        ..VerifyConfig::default()
    };
    assert!(verify(&config).unwrap().passed());
}

#[test]
fn test_invalid_config_is_an_error() {
    let config = VerifyConfig {
        atol: f64::INFINITY,
        ..VerifyConfig::default()
    };
    assert!(matches!(verify(&config), Err(QuantumError::InvalidTolerance(_))));
}

#[test]
fn test_report_serializes_to_json() {
    let report = verify(&VerifyConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["unitary_equivalent"], true);
    assert_eq!(json["tables_match"], true);
    assert_eq!(json["task_table"]["entries"]["110"]["output"], "111");
    assert_eq!(json["config"]["min_dominance"], serde_json::Value::Null);
}

#[test]
fn test_exit_code_follows_outcome() {
    assert_eq!(exit_code(&verify(&VerifyConfig::default())), EXIT_PASS);

    let swapped = VerifyConfig {
        first: U3Angles::T_DAGGER,
        second: U3Angles::HADAMARD,
        ..VerifyConfig::default()
    };
    assert_eq!(exit_code(&verify(&swapped)), EXIT_FAIL);

    let strict = VerifyConfig {
        min_dominance: Some(0.99),
        ..swapped
    };
    assert_eq!(exit_code(&verify(&strict)), EXIT_ERROR);

    let invalid = VerifyConfig {
        atol: -1.0,
        ..VerifyConfig::default()
    };
    assert_eq!(exit_code(&verify(&invalid)), EXIT_ERROR);
    assert_eq!((EXIT_PASS, EXIT_FAIL, EXIT_ERROR), (0, 1, 2));
}
