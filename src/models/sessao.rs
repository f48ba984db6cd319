use jiff::civil::DateTime;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{
    entities::sessao,
    validation::{Constraint, FieldRule, FieldValue, Validate, ValidationErrors, validate},
};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessaoDto {
    #[serde(alias = "DataEHoraDaSessao")]
    pub data_e_hora_da_sessao: Option<DateTime>,
    #[serde(alias = "FilmeId")]
    pub filme_id: Option<i32>,
    #[serde(alias = "CinemaId")]
    pub cinema_id: Option<i32>,
}

impl Validate for CreateSessaoDto {
    const RULES: &'static [FieldRule] = &[
        FieldRule::new(
            "dataEHoraDaSessao",
            Constraint::Required,
            "A data e hora da sessão são obrigatórias!",
        ),
        FieldRule::new("filmeId", Constraint::Required, "O campo de filme é obrigatório!"),
        FieldRule::new("cinemaId", Constraint::Required, "O campo de cinema é obrigatório!"),
    ];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "dataEHoraDaSessao" => present(self.data_e_hora_da_sessao),
            "filmeId" => self.filme_id.into(),
            "cinemaId" => self.cinema_id.into(),
            _ => FieldValue::Absent,
        }
    }
}

impl CreateSessaoDto {
    pub fn into_active_model(self) -> Result<sessao::ActiveModel, ValidationErrors> {
        validate(&self)?;
        Ok(sessao::ActiveModel {
            filme_id: Set(self.filme_id.unwrap_or_default()),
            cinema_id: Set(self.cinema_id.unwrap_or_default()),
            data_e_hora_da_sessao: Set(timestamp_column(self.data_e_hora_da_sessao)),
        })
    }
}

/// The key pair is the identity of a sessao, so only the showtime can be replaced.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessaoDto {
    #[serde(alias = "DataEHoraDaSessao")]
    pub data_e_hora_da_sessao: Option<DateTime>,
}

impl Validate for UpdateSessaoDto {
    const RULES: &'static [FieldRule] = &[FieldRule::new(
        "dataEHoraDaSessao",
        Constraint::Required,
        "A data e hora da sessão são obrigatórias!",
    )];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "dataEHoraDaSessao" => present(self.data_e_hora_da_sessao),
            _ => FieldValue::Absent,
        }
    }
}

impl UpdateSessaoDto {
    pub fn apply_to(self, model: &mut sessao::ActiveModel) -> Result<(), ValidationErrors> {
        validate(&self)?;
        model.data_e_hora_da_sessao = Set(timestamp_column(self.data_e_hora_da_sessao));
        Ok(())
    }
}

fn present(value: Option<DateTime>) -> FieldValue<'static> {
    value.map_or(FieldValue::Absent, |_| FieldValue::Present)
}

fn timestamp_column(value: Option<DateTime>) -> String {
    value.map(|dt| dt.to_string()).unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadSessaoDto {
    pub filme_id: i32,
    pub cinema_id: i32,
    pub data_e_hora_da_sessao: DateTime,
}

impl TryFrom<sessao::Model> for ReadSessaoDto {
    type Error = jiff::Error;

    fn try_from(model: sessao::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            filme_id: model.filme_id,
            cinema_id: model.cinema_id,
            data_e_hora_da_sessao: model.data_e_hora_da_sessao.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn timestamp_is_stored_as_iso_text() {
        let dto = CreateSessaoDto {
            data_e_hora_da_sessao: Some(date(2024, 5, 1).at(20, 30, 0, 0)),
            filme_id: Some(1),
            cinema_id: Some(2),
        };
        let model = dto.into_active_model().unwrap();
        assert_eq!(model.data_e_hora_da_sessao, Set("2024-05-01T20:30:00".to_string()));
    }

    #[test]
    fn missing_keys_are_reported() {
        let dto = CreateSessaoDto {
            data_e_hora_da_sessao: Some(date(2024, 5, 1).at(20, 30, 0, 0)),
            ..Default::default()
        };
        let errors = dto.into_active_model().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["cinemaId", "filmeId"]);
    }

    #[test]
    fn stored_text_parses_back() {
        let model = sessao::Model {
            filme_id: 1,
            cinema_id: 2,
            data_e_hora_da_sessao: "2024-05-01T20:30:00".into(),
        };
        let read = ReadSessaoDto::try_from(model).unwrap();
        assert_eq!(read.data_e_hora_da_sessao, date(2024, 5, 1).at(20, 30, 0, 0));
    }
}
