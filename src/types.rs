use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// GitHub API response structures

/// Repository as returned by `GET /orgs/{org}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub fork: bool,
    pub contributors_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Repository {
    /// Repository name, when the API included one.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// Contributor as returned by `GET /repos/{owner}/{repo}/contributors`
///
/// `fields` is the object exactly as the API sent it, in its key order.
/// On serialization the typed fields are written back into it, so a summed
/// `contributions` keeps its original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Contributor {
    pub login: String,
    pub kind: String,
    pub contributions: u64,
    pub fields: Map<String, Value>,
}

impl Contributor {
    pub const USER_KIND: &'static str = "User";

    pub fn new(login: &str, kind: &str, contributions: u64) -> Self {
        Contributor {
            login: login.to_string(),
            kind: kind.to_string(),
            contributions,
            fields: Map::new(),
        }
    }

    /// Only human accounts are counted; bots and organizations are not.
    pub fn is_user(&self) -> bool {
        self.kind == Self::USER_KIND
    }
}

fn required<'a, T>(
    fields: &'a Map<String, Value>,
    key: &str,
    read: impl Fn(&'a Value) -> Option<T>,
) -> Result<T, String> {
    fields
        .get(key)
        .and_then(read)
        .ok_or_else(|| format!("contributor is missing a valid `{}` field", key))
}

impl TryFrom<Map<String, Value>> for Contributor {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let login = required(&fields, "login", Value::as_str)?.to_string();
        let kind = required(&fields, "type", Value::as_str)?.to_string();
        let contributions = required(&fields, "contributions", Value::as_u64)?;

        Ok(Contributor {
            login,
            kind,
            contributions,
            fields,
        })
    }
}

impl From<Contributor> for Map<String, Value> {
    fn from(contributor: Contributor) -> Self {
        // insert keeps the position of keys already present
        let mut fields = contributor.fields;
        fields.insert("login".to_string(), Value::String(contributor.login));
        fields.insert("type".to_string(), Value::String(contributor.kind));
        fields.insert(
            "contributions".to_string(),
            Value::from(contributor.contributions),
        );
        fields
    }
}
