//! # Production Line
//!
//! 產線瓶頸產能與成本／利潤分析
//!
//! ```
//! use prodline::{LineCalculator, ProcessLine, RunParameters, WaterfallCalculator};
//!
//! let line = ProcessLine::with_default_catalog();
//! let results = LineCalculator::new(RunParameters::default())
//!     .calculate(line.steps())
//!     .unwrap();
//! let waterfall = WaterfallCalculator::build(&results);
//! assert_eq!(waterfall.last().unwrap().value, results.profit);
//! ```

pub mod logging;

pub use prodline_calc::*;
pub use prodline_core::{
    default_steps, validate_steps, LineError, MoveDirection, ProcessLine, Result, RunParameters,
    StepDefinition,
};
