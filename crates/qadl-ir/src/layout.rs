//! Name-to-index layout for execution tooling.
//!
//! The parser keeps operands as the names written in the script. Tooling that
//! hands a definition to an execution engine needs dense indices instead:
//! qubits are numbered in declaration order and classical bits reuse the
//! first-mention indices of the definition. Resolution fails on names that
//! were never declared.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::circuit::CircuitDefinition;
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, Measurement};
use crate::qubit::{ClbitId, QubitId};

/// Qubit and classical-bit indices of one circuit (modules not included).
#[derive(Debug, Clone)]
pub struct CircuitLayout {
    qubits: FxHashMap<String, QubitId>,
    clbits: FxHashMap<String, ClbitId>,
    num_qubits: usize,
    num_clbits: usize,
}

impl CircuitLayout {
    /// Build the layout of a definition.
    ///
    /// When a qubit name is declared twice the later declaration wins; the
    /// register size still counts every declaration.
    pub fn new(circuit: &CircuitDefinition) -> IrResult<Self> {
        let mut qubits = FxHashMap::default();
        for (idx, qubit) in circuit.qubits().iter().enumerate() {
            qubits.insert(qubit.name().to_string(), QubitId::try_from(idx)?);
        }
        let clbits = circuit
            .classical_bits()
            .iter()
            .map(|(name, id)| (name.to_string(), id))
            .collect();

        Ok(Self {
            qubits,
            clbits,
            num_qubits: circuit.num_qubits(),
            num_clbits: circuit.num_clbits(),
        })
    }

    /// Size of the quantum register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Size of the classical register.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// Index of a qubit name.
    pub fn qubit(&self, name: &str) -> Option<QubitId> {
        self.qubits.get(name).copied()
    }

    /// Index of a classical-bit name.
    pub fn clbit(&self, name: &str) -> Option<ClbitId> {
        self.clbits.get(name).copied()
    }

    /// Resolve the operands of a gate.
    pub fn resolve_gate(&self, gate: &Gate) -> IrResult<ResolvedGate> {
        let qubits = gate
            .operands()
            .iter()
            .map(|name| {
                self.qubit(name).ok_or_else(|| IrError::UnknownQubit {
                    name: name.clone(),
                    gate_name: Some(gate.name().to_string()),
                })
            })
            .collect::<IrResult<Vec<_>>>()?;

        Ok(ResolvedGate {
            name: gate.name().to_string(),
            qubits,
        })
    }

    /// Resolve a measurement to `(qubit, clbit)` indices.
    pub fn resolve_measurement(&self, measurement: &Measurement) -> IrResult<ResolvedMeasurement> {
        let qubit = self
            .qubit(measurement.qubit())
            .ok_or_else(|| IrError::UnknownQubit {
                name: measurement.qubit().to_string(),
                gate_name: None,
            })?;
        let clbit = self
            .clbit(measurement.classical_bit())
            .ok_or_else(|| IrError::UnknownClbit(measurement.classical_bit().to_string()))?;

        Ok(ResolvedMeasurement { qubit, clbit })
    }
}

/// A gate with operands resolved to qubit indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGate {
    /// Gate name as written.
    pub name: String,
    /// Operand indices in order.
    pub qubits: Vec<QubitId>,
}

/// A measurement resolved to indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMeasurement {
    /// Measured qubit.
    pub qubit: QubitId,
    /// Target classical bit.
    pub clbit: ClbitId,
}

/// A circuit with every operand resolved, ready for an execution backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCircuit {
    /// Circuit name.
    pub name: String,
    /// Quantum register size.
    pub num_qubits: usize,
    /// Classical register size.
    pub num_clbits: usize,
    /// Gates in order.
    pub gates: Vec<ResolvedGate>,
    /// Measurements in order.
    pub measurements: Vec<ResolvedMeasurement>,
}

impl ResolvedCircuit {
    /// Resolve every gate and measurement of a definition.
    pub fn from_definition(circuit: &CircuitDefinition) -> IrResult<Self> {
        let layout = circuit.layout()?;
        let gates = circuit
            .gates()
            .iter()
            .map(|g| layout.resolve_gate(g))
            .collect::<IrResult<Vec<_>>>()?;
        let measurements = circuit
            .measurements()
            .iter()
            .map(|m| layout.resolve_measurement(m))
            .collect::<IrResult<Vec<_>>>()?;

        Ok(Self {
            name: circuit.name().to_string(),
            num_qubits: layout.num_qubits(),
            num_clbits: layout.num_clbits(),
            gates,
            measurements,
        })
    }
}
