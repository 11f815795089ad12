use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/consultarCpf`.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    /// Raw CPF as typed by the caller, formatting included.
    #[serde(default)]
    pub cpf: Option<String>,
}

/// Placeholder returned for fields the upstream could not provide.
pub const UNAVAILABLE: &str = "Não disponível";

// Key paths probed per output field, in priority order. Upstream responses
// vary between flat upper-case keys, flat lower-case keys, and a nested
// `data` object; the first non-empty match wins.
const CPF_KEYS: &[&[&str]] = &[&["CPF"], &["cpf"]];
const NOME_KEYS: &[&[&str]] = &[&["NOME"], &["nome"], &["data", "nome"]];
const NASC_KEYS: &[&[&str]] = &[&["NASC"], &["nascimento"], &["data", "nascimento"]];
const NOME_MAE_KEYS: &[&[&str]] = &[&["NOME_MAE"], &["mae"], &["data", "mae"]];

/// Fixed four-field record returned to callers regardless of upstream
/// field naming. Always fully populated: fields the upstream omits carry
/// the [`UNAVAILABLE`] sentinel rather than being absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "CPF")]
    pub cpf: String,
    #[serde(rename = "NOME")]
    pub nome: String,
    #[serde(rename = "NASC")]
    pub nasc: String,
    #[serde(rename = "NOME_MAE")]
    pub nome_mae: String,
}

impl NormalizedRecord {
    /// Map a raw upstream payload into the fixed output shape.
    ///
    /// `cpf` is the validated input value; it backstops the CPF field when
    /// the upstream omits it. Names and dates are passed through verbatim,
    /// with no reformatting.
    pub fn from_upstream(data: &Value, cpf: &str) -> Self {
        Self {
            cpf: probe(data, CPF_KEYS).unwrap_or_else(|| cpf.to_string()),
            nome: probe(data, NOME_KEYS).unwrap_or_else(|| UNAVAILABLE.to_string()),
            nasc: probe(data, NASC_KEYS).unwrap_or_else(|| UNAVAILABLE.to_string()),
            nome_mae: probe(data, NOME_MAE_KEYS).unwrap_or_else(|| UNAVAILABLE.to_string()),
        }
    }
}

/// Walk each candidate key path and return the first non-empty string.
fn probe(data: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| {
        path.iter()
            .try_fold(data, |node, key| node.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    })
}
