use sea_orm::Set;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    entities::filme,
    validation::{Constraint, FieldRule, FieldValue, Validate, ValidationErrors, validate},
};

pub const MAX_TITULO: usize = 30;
pub const MAX_GENERO: usize = 50;
pub const MIN_DURACAO: i64 = 1;
pub const MAX_DURACAO: i64 = 300;

const RULES: &[FieldRule] = &[
    FieldRule::new("titulo", Constraint::Required, "O título do filme é obrigatório!"),
    FieldRule::new(
        "titulo",
        Constraint::MaxLength(MAX_TITULO),
        "O tamanho do título não pode exceder 30 caracteres.",
    ),
    FieldRule::new("genero", Constraint::Required, "O gênero do filme é obrigatório!"),
    FieldRule::new(
        "genero",
        Constraint::MaxLength(MAX_GENERO),
        "O tamanho do gênero não pode exceder 50 caracteres.",
    ),
    FieldRule::new("duracao", Constraint::Required, "A duração do filme é obrigatória!"),
    FieldRule::new(
        "duracao",
        Constraint::Range(MIN_DURACAO, MAX_DURACAO),
        "A duração deve ser entre 1 e 300 minutos.",
    ),
];

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmeDto {
    #[serde(alias = "Titulo")]
    pub titulo: Option<String>,
    #[serde(alias = "Genero")]
    pub genero: Option<String>,
    #[serde(alias = "Duracao")]
    pub duracao: Option<i64>,
}

impl Validate for CreateFilmeDto {
    const RULES: &'static [FieldRule] = RULES;

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "titulo" => self.titulo.as_deref().into(),
            "genero" => self.genero.as_deref().into(),
            "duracao" => self.duracao.into(),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateFilmeDto {
    pub fn into_active_model(self) -> Result<filme::ActiveModel, ValidationErrors> {
        validate(&self)?;
        Ok(filme::ActiveModel {
            titulo: Set(self.titulo.unwrap_or_default()),
            genero: Set(self.genero.unwrap_or_default()),
            duracao: Set(duracao_column(self.duracao)),
            ..Default::default()
        })
    }
}

/// Editable copy of a filme; also the document JSON Patch operations act on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmeDto {
    #[serde(alias = "Titulo")]
    pub titulo: Option<String>,
    #[serde(alias = "Genero")]
    pub genero: Option<String>,
    #[serde(alias = "Duracao")]
    pub duracao: Option<i64>,
}

impl Validate for UpdateFilmeDto {
    const RULES: &'static [FieldRule] = RULES;

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "titulo" => self.titulo.as_deref().into(),
            "genero" => self.genero.as_deref().into(),
            "duracao" => self.duracao.into(),
            _ => FieldValue::Absent,
        }
    }
}

impl UpdateFilmeDto {
    const MEMBERS: &'static [&'static str] = &["titulo", "genero", "duracao"];

    /// Reads back a patched document; members a filme does not have are rejected.
    pub fn from_patched(doc: Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match &doc {
            Value::Object(map) => {
                for key in map.keys().filter(|key| !Self::MEMBERS.contains(&key.as_str())) {
                    let message = format!("the target location `/{key}` was not found");
                    errors.add(key.as_str(), message);
                }
            },
            _ => errors.add("patch", "the patched document is not an object"),
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        serde_json::from_value(doc)
            .map_err(|err| ValidationErrors::single("patch", err.to_string()))
    }

    pub fn apply_to(self, model: &mut filme::ActiveModel) -> Result<(), ValidationErrors> {
        validate(&self)?;
        model.titulo = Set(self.titulo.unwrap_or_default());
        model.genero = Set(self.genero.unwrap_or_default());
        model.duracao = Set(duracao_column(self.duracao));
        Ok(())
    }
}

impl From<&filme::Model> for UpdateFilmeDto {
    fn from(model: &filme::Model) -> Self {
        Self {
            titulo: Some(model.titulo.clone()),
            genero: Some(model.genero.clone()),
            duracao: Some(model.duracao.into()),
        }
    }
}

// Only called after validation, so the value is within 1..=300.
fn duracao_column(duracao: Option<i64>) -> i32 {
    duracao.and_then(|d| i32::try_from(d).ok()).unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadFilmeDto {
    pub id: i32,
    pub titulo: String,
    pub genero: String,
    pub duracao: i32,
}

impl From<filme::Model> for ReadFilmeDto {
    fn from(model: filme::Model) -> Self {
        Self { id: model.id, titulo: model.titulo, genero: model.genero, duracao: model.duracao }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(titulo: &str, genero: &str, duracao: i64) -> CreateFilmeDto {
        CreateFilmeDto {
            titulo: Some(titulo.to_string()),
            genero: Some(genero.to_string()),
            duracao: Some(duracao),
        }
    }

    #[test]
    fn valid_filme_maps_to_active_model() {
        let model = dto("Matrix", "SciFi", 136).into_active_model().unwrap();
        assert_eq!(model.titulo, Set("Matrix".to_string()));
        assert_eq!(model.duracao, Set(136));
    }

    #[test]
    fn titulo_longer_than_limit_is_rejected() {
        let errors = dto(&"x".repeat(31), "Drama", 100).into_active_model().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["titulo"]);
    }

    #[test]
    fn duracao_bounds_are_inclusive() {
        assert!(dto("A", "B", 1).into_active_model().is_ok());
        assert!(dto("A", "B", 300).into_active_model().is_ok());
        assert!(dto("A", "B", 0).into_active_model().is_err());
        assert!(dto("A", "B", 301).into_active_model().is_err());
    }

    #[test]
    fn missing_fields_report_required_messages() {
        let errors = CreateFilmeDto::default().into_active_model().unwrap_err();
        assert_eq!(errors.messages("titulo"), ["O título do filme é obrigatório!"]);
        assert_eq!(errors.messages("genero"), ["O gênero do filme é obrigatório!"]);
        assert_eq!(errors.messages("duracao"), ["A duração do filme é obrigatória!"]);
    }

    #[test]
    fn pascal_case_members_are_accepted() {
        let parsed: CreateFilmeDto =
            serde_json::from_str(r#"{"Titulo":"Matrix","Genero":"SciFi","Duracao":136}"#).unwrap();
        assert_eq!(parsed.titulo.as_deref(), Some("Matrix"));
        assert_eq!(parsed.duracao, Some(136));
    }

    #[test]
    fn update_copy_round_trips_model_fields() {
        let model =
            filme::Model { id: 7, titulo: "Matrix".into(), genero: "SciFi".into(), duracao: 136 };
        let copy = UpdateFilmeDto::from(&model);
        let mut active: filme::ActiveModel = model.into();
        copy.apply_to(&mut active).unwrap();
        assert_eq!(active.duracao, Set(136));
    }

    #[test]
    fn patched_document_with_unknown_member_is_rejected() {
        let doc = serde_json::json!({
            "titulo": "Matrix", "genero": "SciFi", "duracao": 136, "nota": 5
        });
        let errors = UpdateFilmeDto::from_patched(doc).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["nota"]);
        assert!(errors.messages("nota")[0].contains("/nota"));
    }

    #[test]
    fn patched_document_with_known_members_is_read_back() {
        let doc = serde_json::json!({ "titulo": "Matrix", "genero": null, "duracao": 150 });
        let patched = UpdateFilmeDto::from_patched(doc).unwrap();
        assert_eq!(patched.duracao, Some(150));
        assert_eq!(patched.genero, None);

        let errors = UpdateFilmeDto::from_patched(serde_json::json!([1])).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["patch"]);
    }
}
