#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Labour Welfare Fund normalization and ESIC applicability.
//!
//! Both tables are hand-transcribed from the published state-wise PDFs
//! (`LWF.pdf` and `ESIC State Wise.pdf`). Nothing in this crate reads
//! those documents; [`lwf::monthly_table`] and
//! [`esic::applicability_table`] always produce the same output for the
//! same transcription.

pub mod esic;
pub mod frequency;
pub mod lwf;
pub mod matching;

pub use labour_compliance_models::{
    ESIC_WAGE_THRESHOLD, EsicEntry, Frequency, MonthlyAmounts, MonthlyContribution, Rate,
    StateContribution,
};
