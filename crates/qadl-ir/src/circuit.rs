//! The circuit definition aggregate.

use serde::{Deserialize, Serialize};

use crate::clbits::ClassicalBits;
use crate::error::IrResult;
use crate::gate::{Gate, Measurement};
use crate::hardware::HardwareConfig;
use crate::layout::CircuitLayout;
use crate::map::NamedMap;
use crate::qubit::{ClbitId, Qubit};

/// A parsed circuit: declarations, operations, directives and nested modules.
///
/// Built up statement by statement while a script is parsed. Every list keeps
/// the order in which the script introduced its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitDefinition {
    /// Name from the `Circuit <name> {` header.
    name: String,
    /// Declared qubits. Duplicate names are kept.
    qubits: Vec<Qubit>,
    /// Gate applications.
    gates: Vec<Gate>,
    /// Measurements.
    measurements: Vec<Measurement>,
    /// Classical-bit name to index mapping, first-mention order.
    classical_bits: ClassicalBits,
    /// Raw `if (...) {` / `while (...) {` lines.
    control_flow: Vec<String>,
    /// Raw `error_correction ...` lines.
    error_correction: Vec<String>,
    /// Merged settings of all `hardware` blocks.
    hardware: HardwareConfig,
    /// Nested circuits keyed by module name.
    modules: NamedMap<CircuitDefinition>,
    /// Raw `@...` lines.
    annotations: Vec<String>,
}

impl CircuitDefinition {
    /// Create a new empty definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            gates: vec![],
            measurements: vec![],
            classical_bits: ClassicalBits::new(),
            control_flow: vec![],
            error_correction: vec![],
            hardware: HardwareConfig::new(),
            modules: NamedMap::new(),
            annotations: vec![],
        }
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Declare a qubit.
    pub fn add_qubit(&mut self, qubit: Qubit) -> &mut Self {
        self.qubits.push(qubit);
        self
    }

    /// Append a gate application.
    pub fn add_gate(&mut self, gate: Gate) -> &mut Self {
        self.gates.push(gate);
        self
    }

    /// Append a measurement, allocating its classical bit on first mention.
    pub fn add_measurement(&mut self, measurement: Measurement) -> IrResult<ClbitId> {
        let id = self.classical_bits.allocate(measurement.classical_bit())?;
        self.measurements.push(measurement);
        Ok(id)
    }

    /// Record a control-flow line verbatim.
    pub fn add_control_flow(&mut self, line: impl Into<String>) -> &mut Self {
        self.control_flow.push(line.into());
        self
    }

    /// Record an error-correction directive verbatim.
    pub fn add_error_correction(&mut self, line: impl Into<String>) -> &mut Self {
        self.error_correction.push(line.into());
        self
    }

    /// Merge the settings of a hardware block.
    pub fn merge_hardware(&mut self, config: HardwareConfig) -> &mut Self {
        self.hardware.merge(config);
        self
    }

    /// Attach a nested circuit under a module name, replacing any previous one.
    pub fn add_module(&mut self, name: impl Into<String>, module: CircuitDefinition) -> &mut Self {
        self.modules.insert(name, module);
        self
    }

    /// Record an annotation verbatim.
    pub fn add_annotation(&mut self, line: impl Into<String>) -> &mut Self {
        self.annotations.push(line.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared qubits.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Gate applications.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Measurements.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Classical-bit index mapping.
    pub fn classical_bits(&self) -> &ClassicalBits {
        &self.classical_bits
    }

    /// Control-flow lines.
    pub fn control_flow(&self) -> &[String] {
        &self.control_flow
    }

    /// Error-correction directives.
    pub fn error_correction(&self) -> &[String] {
        &self.error_correction
    }

    /// Hardware configuration.
    pub fn hardware(&self) -> &HardwareConfig {
        &self.hardware
    }

    /// Nested modules.
    pub fn modules(&self) -> &NamedMap<CircuitDefinition> {
        &self.modules
    }

    /// Look up a nested module by name.
    pub fn module(&self, name: &str) -> Option<&CircuitDefinition> {
        self.modules.get(name)
    }

    /// Annotation lines.
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Get the number of declared qubits, duplicates included.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of distinct classical bits.
    pub fn num_clbits(&self) -> usize {
        self.classical_bits.len()
    }

    /// Get the number of gate applications in this circuit only.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Get the number of measurements in this circuit only.
    pub fn num_measurements(&self) -> usize {
        self.measurements.len()
    }

    /// Gate applications in this circuit and all nested modules.
    pub fn total_gate_count(&self) -> usize {
        self.gates.len()
            + self
                .modules
                .values()
                .map(CircuitDefinition::total_gate_count)
                .sum::<usize>()
    }

    /// Deepest module nesting below this circuit (0 without modules).
    pub fn module_depth(&self) -> usize {
        self.modules
            .values()
            .map(|m| m.module_depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Build the name-to-index layout used by execution tooling.
    pub fn layout(&self) -> IrResult<CircuitLayout> {
        CircuitLayout::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teleportation() -> CircuitDefinition {
        let mut circuit = CircuitDefinition::new("QuantumTeleportation");
        circuit
            .add_qubit(Qubit::new("q0"))
            .add_qubit(Qubit::new("q1"))
            .add_qubit(Qubit::new("q2"))
            .add_gate(Gate::new("H", ["q1"]))
            .add_gate(Gate::new("CNOT", ["q1", "q2"]));
        circuit.add_measurement(Measurement::new("q0", "c0")).unwrap();
        circuit.add_measurement(Measurement::new("q1", "c1")).unwrap();
        circuit
    }

    #[test]
    fn test_new_circuit() {
        let circuit = CircuitDefinition::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
        assert!(circuit.modules().is_empty());
        assert!(circuit.hardware().is_empty());
    }

    #[test]
    fn test_measurement_allocates_bits() {
        let mut circuit = CircuitDefinition::new("m");
        let a = circuit.add_measurement(Measurement::new("q0", "c1")).unwrap();
        let b = circuit.add_measurement(Measurement::new("q1", "c0")).unwrap();
        let c = circuit.add_measurement(Measurement::new("q2", "c1")).unwrap();

        assert_eq!((a, b, c), (ClbitId(0), ClbitId(1), ClbitId(0)));
        assert_eq!(circuit.num_measurements(), 3);
        assert_eq!(circuit.num_clbits(), 2);
    }

    #[test]
    fn test_duplicate_qubits_kept() {
        let mut circuit = CircuitDefinition::new("dup");
        circuit.add_qubit(Qubit::new("q0")).add_qubit(Qubit::new("q0"));
        assert_eq!(circuit.num_qubits(), 2);
    }

    #[test]
    fn test_modules_and_counts() {
        let mut inner = CircuitDefinition::new("Inner");
        inner.add_gate(Gate::new("X", ["a"]));
        let mut middle = CircuitDefinition::new("Middle");
        middle.add_module("Deep", inner);

        let mut top = teleportation();
        top.add_module("Sub", middle);

        assert_eq!(top.total_gate_count(), 3);
        assert_eq!(top.module_depth(), 2);
        assert_eq!(top.module("Sub").unwrap().name(), "Middle");
        assert!(top.module("Missing").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut circuit = teleportation();
        circuit.add_control_flow("if (c0 == 1) {");
        circuit.add_annotation("@author demo");

        let json = serde_json::to_string(&circuit).unwrap();
        let back: CircuitDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
    }
}
