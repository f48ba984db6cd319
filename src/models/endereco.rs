use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{
    entities::endereco,
    validation::{Constraint, FieldRule, FieldValue, Validate, ValidationErrors, validate},
};

const RULES: &[FieldRule] = &[
    FieldRule::new("logradouro", Constraint::Required, "O campo de logradouro é obrigatório!"),
    FieldRule::new("numero", Constraint::Required, "O campo de número é obrigatório!"),
];

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnderecoDto {
    #[serde(alias = "Logradouro")]
    pub logradouro: Option<String>,
    #[serde(alias = "Numero")]
    pub numero: Option<i32>,
}

impl Validate for CreateEnderecoDto {
    const RULES: &'static [FieldRule] = RULES;

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "logradouro" => self.logradouro.as_deref().into(),
            "numero" => self.numero.into(),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateEnderecoDto {
    pub fn into_active_model(self) -> Result<endereco::ActiveModel, ValidationErrors> {
        validate(&self)?;
        Ok(endereco::ActiveModel {
            logradouro: Set(self.logradouro.unwrap_or_default()),
            numero: Set(self.numero.unwrap_or_default()),
            ..Default::default()
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnderecoDto {
    #[serde(alias = "Logradouro")]
    pub logradouro: Option<String>,
    #[serde(alias = "Numero")]
    pub numero: Option<i32>,
}

impl Validate for UpdateEnderecoDto {
    const RULES: &'static [FieldRule] = RULES;

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "logradouro" => self.logradouro.as_deref().into(),
            "numero" => self.numero.into(),
            _ => FieldValue::Absent,
        }
    }
}

impl UpdateEnderecoDto {
    pub fn apply_to(self, model: &mut endereco::ActiveModel) -> Result<(), ValidationErrors> {
        validate(&self)?;
        model.logradouro = Set(self.logradouro.unwrap_or_default());
        model.numero = Set(self.numero.unwrap_or_default());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadEnderecoDto {
    pub id: i32,
    pub logradouro: String,
    pub numero: i32,
}

impl From<endereco::Model> for ReadEnderecoDto {
    fn from(model: endereco::Model) -> Self {
        Self { id: model.id, logradouro: model.logradouro, numero: model.numero }
    }
}
