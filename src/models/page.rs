use serde::{Deserialize, Deserializer, Serialize};

/// List response envelope.
///
/// List endpoints answer either with a bare JSON array or with a paginated
/// object (`count`, `next`, `previous`, `results`, some endpoints say `data`
/// instead of `results`). Both decode into the same `Page<T>` at the client
/// boundary so callers never inspect the shape themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPage<T> {
    Flat(Vec<T>),
    Paged {
        #[serde(alias = "data")]
        results: Vec<T>,
        #[serde(default)]
        count: Option<usize>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
    },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawPage::<T>::deserialize(deserializer)? {
            RawPage::Flat(results) => Page {
                count: results.len(),
                next: None,
                previous: None,
                results,
            },
            RawPage::Paged {
                results,
                count,
                next,
                previous,
            } => Page {
                count: count.unwrap_or(results.len()),
                next,
                previous,
                results,
            },
        })
    }
}
