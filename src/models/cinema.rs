use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::{ReadEnderecoDto, ReadSessaoDto};
use crate::{
    entities::{cinema, endereco, sessao},
    validation::{Constraint, FieldRule, FieldValue, Validate, ValidationErrors, validate},
};

const RULES: &[FieldRule] = &[
    FieldRule::new("nome", Constraint::Required, "O campo de nome é obrigatório!"),
    FieldRule::new("enderecoId", Constraint::Required, "O campo de endereço é obrigatório!"),
];

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCinemaDto {
    #[serde(alias = "Nome")]
    pub nome: Option<String>,
    #[serde(alias = "EnderecoId")]
    pub endereco_id: Option<i32>,
}

impl Validate for CreateCinemaDto {
    const RULES: &'static [FieldRule] = RULES;

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "nome" => self.nome.as_deref().into(),
            "enderecoId" => self.endereco_id.into(),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateCinemaDto {
    pub fn into_active_model(self) -> Result<cinema::ActiveModel, ValidationErrors> {
        validate(&self)?;
        Ok(cinema::ActiveModel {
            nome: Set(self.nome.unwrap_or_default()),
            endereco_id: Set(self.endereco_id.unwrap_or_default()),
            ..Default::default()
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCinemaDto {
    #[serde(alias = "Nome")]
    pub nome: Option<String>,
    #[serde(alias = "EnderecoId")]
    pub endereco_id: Option<i32>,
}

impl Validate for UpdateCinemaDto {
    const RULES: &'static [FieldRule] = RULES;

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "nome" => self.nome.as_deref().into(),
            "enderecoId" => self.endereco_id.into(),
            _ => FieldValue::Absent,
        }
    }
}

impl UpdateCinemaDto {
    pub fn apply_to(self, model: &mut cinema::ActiveModel) -> Result<(), ValidationErrors> {
        validate(&self)?;
        model.nome = Set(self.nome.unwrap_or_default());
        model.endereco_id = Set(self.endereco_id.unwrap_or_default());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadCinemaDto {
    pub id: i32,
    pub nome: String,
    pub endereco_id: i32,
    pub endereco: Option<ReadEnderecoDto>,
    pub sessoes: Vec<ReadSessaoDto>,
}

impl ReadCinemaDto {
    pub fn new(
        model: cinema::Model,
        endereco: Option<endereco::Model>,
        sessoes: Vec<sessao::Model>,
    ) -> Result<Self, jiff::Error> {
        Ok(Self {
            id: model.id,
            nome: model.nome,
            endereco_id: model.endereco_id,
            endereco: endereco.map(ReadEnderecoDto::from),
            sessoes: sessoes
                .into_iter()
                .map(ReadSessaoDto::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}
