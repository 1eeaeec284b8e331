use std::{collections::HashMap, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, trace};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\((\w+)\)s").expect("placeholder pattern is valid"));

/// Substitutes `%(name)s` placeholders with the matching param.
///
/// Placeholders without a param are left as they are.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| {
            let name = &caps[1];
            match params.iter().find(|(k, _)| *k == name) {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

pub trait Translate {
    fn gettext(&self, msgid: &str) -> String;

    fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String;

    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(&self.gettext(key), params)
    }

    fn translate_plural(
        &self,
        singular: &str,
        plural: &str,
        count: u64,
        params: &[(&str, &str)],
    ) -> String {
        interpolate(&self.ngettext(singular, plural, count), params)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum Message {
    Single(String),
    Plural(Vec<String>),
}

/// A message catalog in the shape of a Django javascript catalog: each msgid
/// maps to its translation, or to an array of plural forms.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, Message>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse message catalog")
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn plural_index(count: u64) -> usize {
    if count == 1 {
        0
    } else {
        1
    }
}

impl Translate for Catalog {
    fn gettext(&self, msgid: &str) -> String {
        match self.messages.get(msgid) {
            Some(Message::Single(s)) => s.clone(),
            Some(Message::Plural(forms)) if !forms.is_empty() => forms[0].clone(),
            _ => {
                trace!(msgid, "no translation");
                msgid.to_string()
            }
        }
    }

    fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
        let index = plural_index(count);
        match self.messages.get(singular) {
            Some(Message::Plural(forms)) if !forms.is_empty() => {
                forms[index.min(forms.len() - 1)].clone()
            }
            Some(Message::Single(s)) if index == 0 => s.clone(),
            _ => match index {
                0 => singular.to_string(),
                _ => plural.to_string(),
            },
        }
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_lowercase()
}

/// Catalogs keyed by language tag, with an identity fallback.
#[derive(Clone, Debug, Default)]
pub struct Catalogs {
    default: Catalog,
    languages: HashMap<String, Catalog>,
}

impl Catalogs {
    pub async fn load_dir(dir: &Path) -> Result<Self> {
        let mut languages = HashMap::new();

        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("failed to read locale directory {}", dir.display()))?;

        let pattern = Regex::new(r"^([A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})?)\.json$")?;

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            let Some(captures) = pattern.captures(file_name) else {
                debug!(file_name, "skipping non-catalog file");
                continue;
            };
            let tag = normalize_tag(&captures[1]);

            let json = fs::read_to_string(entry.path())
                .await
                .with_context(|| format!("failed to read catalog {}", file_name))?;
            let catalog = Catalog::from_json(&json)
                .with_context(|| format!("invalid catalog {}", file_name))?;
            debug!(%tag, messages = catalog.len(), "loaded catalog");

            languages.insert(tag, catalog);
        }

        Ok(Self {
            default: Catalog::default(),
            languages,
        })
    }

    pub fn insert(&mut self, tag: &str, catalog: Catalog) {
        self.languages.insert(normalize_tag(tag), catalog);
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort();
        tags
    }

    /// Exact tag, then primary subtag, then the identity catalog.
    pub fn get(&self, tag: &str) -> &Catalog {
        let tag = normalize_tag(tag);
        if let Some(catalog) = self.languages.get(&tag) {
            return catalog;
        }
        tag.split('-')
            .next()
            .and_then(|primary| self.languages.get(primary))
            .unwrap_or(&self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> Catalog {
        Catalog::from_json(
            r#"{
                "Congratulations!": "Félicitations !",
                "(contains %(student_count)s student)": [
                    "(contient %(student_count)s étudiant)",
                    "(contient %(student_count)s étudiants)"
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn interpolate_named_placeholders() {
        assert_eq!(
            interpolate("the %(title)s %(type)s", &[("title", "Data"), ("type", "MicroMasters")]),
            "the Data MicroMasters"
        );
        assert_eq!(interpolate("%(missing)s stays", &[]), "%(missing)s stays");
    }

    #[test]
    fn identity_catalog_falls_back_to_msgid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.gettext("Congratulations!"), "Congratulations!");
        assert_eq!(catalog.ngettext("one", "many", 1), "one");
        assert_eq!(catalog.ngettext("one", "many", 0), "many");
        assert_eq!(catalog.ngettext("one", "many", 5), "many");
    }

    #[test]
    fn catalog_plural_forms() {
        let catalog = french();
        let singular = "(contains %(student_count)s student)";
        let plural = "(contains %(student_count)s students)";
        assert_eq!(
            catalog.translate_plural(singular, plural, 1, &[("student_count", "1")]),
            "(contient 1 étudiant)"
        );
        assert_eq!(
            catalog.translate_plural(singular, plural, 3, &[("student_count", "3")]),
            "(contient 3 étudiants)"
        );
        assert_eq!(catalog.gettext("Congratulations!"), "Félicitations !");
    }

    #[test]
    fn invalid_catalog_is_an_error() {
        assert!(Catalog::from_json("[1, 2]").is_err());
    }

    #[test]
    fn catalogs_lookup_order() {
        let mut catalogs = Catalogs::default();
        catalogs.insert("fr", french());

        assert_eq!(catalogs.get("fr").gettext("Congratulations!"), "Félicitations !");
        assert_eq!(catalogs.get("fr_CA").gettext("Congratulations!"), "Félicitations !");
        assert_eq!(catalogs.get("de").gettext("Congratulations!"), "Congratulations!");
        assert_eq!(catalogs.languages(), vec!["fr"]);
    }

    #[tokio::test]
    async fn load_dir_reads_json_catalogs() {
        let dir = std::env::temp_dir().join(format!("learner-views-locale-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("es_419.json"), r#"{"Congratulations!": "¡Felicidades!"}"#).unwrap();
        std::fs::write(dir.join("README.txt"), "not a catalog").unwrap();

        let catalogs = Catalogs::load_dir(&dir).await.unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(catalogs.languages(), vec!["es-419"]);
        assert_eq!(catalogs.get("es-419").gettext("Congratulations!"), "¡Felicidades!");
    }
}
