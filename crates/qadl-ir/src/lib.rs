//! QADL Circuit Definition Model
//!
//! This crate holds the data produced by the QADL front end: a
//! [`CircuitDefinition`] with its qubits, gates, measurements, classical-bit
//! indices, hardware configuration, directives and nested modules.
//!
//! # Core Components
//!
//! - **Declarations**: [`Qubit`] (name only), [`Gate`] and [`Measurement`]
//!   referring to qubits by the names written in the script
//! - **Classical bits**: [`ClassicalBits`], dense indices in first-mention order
//! - **Hardware**: [`HardwareConfig`] with [`HardwareValue`] telling token lists
//!   apart from `qubit_connectivity` lines
//! - **Modules**: nested definitions in an insertion-ordered [`NamedMap`]
//! - **Layout**: [`CircuitLayout`] / [`ResolvedCircuit`] for tooling that needs
//!   [`QubitId`] and [`ClbitId`] indices
//!
//! # Example: Building a Definition
//!
//! ```rust
//! use qadl_ir::{CircuitDefinition, ClbitId, Gate, Measurement, Qubit};
//!
//! let mut circuit = CircuitDefinition::new("Bell");
//! circuit
//!     .add_qubit(Qubit::new("q0"))
//!     .add_qubit(Qubit::new("q1"))
//!     .add_gate(Gate::new("H", ["q0"]))
//!     .add_gate(Gate::new("CNOT", ["q0", "q1"]));
//!
//! let bit = circuit.add_measurement(Measurement::new("q0", "c0")).unwrap();
//! assert_eq!(bit, ClbitId(0));
//! assert_eq!(circuit.num_qubits(), 2);
//! ```
//!
//! # Example: Resolving Operands
//!
//! ```rust
//! use qadl_ir::{CircuitDefinition, Gate, Qubit, QubitId, ResolvedCircuit};
//!
//! let mut circuit = CircuitDefinition::new("Flip");
//! circuit.add_qubit(Qubit::new("a")).add_gate(Gate::new("X", ["a"]));
//!
//! let resolved = ResolvedCircuit::from_definition(&circuit).unwrap();
//! assert_eq!(resolved.gates[0].qubits, [QubitId(0)]);
//! ```

pub mod circuit;
pub mod clbits;
pub mod error;
pub mod gate;
pub mod hardware;
pub mod layout;
pub mod map;
pub mod qubit;

pub use circuit::CircuitDefinition;
pub use clbits::ClassicalBits;
pub use error::{IrError, IrResult};
pub use gate::{Gate, Measurement};
pub use hardware::{HardwareConfig, HardwareValue, QUBIT_CONNECTIVITY};
pub use layout::{CircuitLayout, ResolvedCircuit, ResolvedGate, ResolvedMeasurement};
pub use map::NamedMap;
pub use qubit::{ClbitId, Qubit, QubitId};
