//! # Clause-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/        # Cross-clause flows
//!     ├── harness.rs      # Agreement harness: one store, all clauses, bus
//!     ├── content.rs      # cl-02 register / seal / verify
//!     ├── cross_chain.rs  # cl-03 two-chain relay round trips
//!     ├── deadline.rs     # cl-04 time-driven enforcement
//!     ├── arbitration.rs  # cl-05 linkage and rulings with deadlines
//!     └── isolation.rs    # cl-01 per-instance separation
//!
//! tests/benches/
//! └── clause_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cl-tests
//!
//! # By flow
//! cargo test -p cl-tests integration::cross_chain::
//!
//! # Benchmarks
//! cargo bench -p cl-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]
