//! Enumerations used by audit, report and duty-order entities
//!
//! Values travel as their constant names in JSON (e.g. `"AVALIE"`).

use serde::{Deserialize, Serialize};

/// State of an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaziateHesabResi {
    SodoorBargeMamooriat,
    DarShorofMamooriat,
}

/// Kind of audit program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoeBarnameHesabResi {
    HesabresiBarnamee,
    HesabresiPeygiri,
}

/// Stage of an audit report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaziatGozaresh {
    Avalie,
    Modir,
}

/// Stage of a duty order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaziatBargeMamooriat {
    SarparastTimeHesabresi,
    DarEntezarTaeedModirHesabresi,
}

/// Kind of document attached to an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    MadarekBarnameHesabResi,
    MohasebeHazineMamooriat,
}
