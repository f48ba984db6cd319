use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enderecos::Table)
                    .if_not_exists()
                    .col(pk_auto(Enderecos::Id))
                    .col(string(Enderecos::Logradouro))
                    .col(integer(Enderecos::Numero))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cinemas::Table)
                    .if_not_exists()
                    .col(pk_auto(Cinemas::Id))
                    .col(string(Cinemas::Nome))
                    .col(integer(Cinemas::EnderecoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cinemas_endereco_id")
                            .from(Cinemas::Table, Cinemas::EnderecoId)
                            .to(Enderecos::Table, Enderecos::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cinemas_endereco_id")
                    .table(Cinemas::Table)
                    .col(Cinemas::EnderecoId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Filmes::Table)
                    .if_not_exists()
                    .col(pk_auto(Filmes::Id))
                    .col(string_len(Filmes::Titulo, 30))
                    .col(string_len(Filmes::Genero, 50))
                    .col(integer(Filmes::Duracao))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sessoes::Table)
                    .if_not_exists()
                    .col(integer(Sessoes::FilmeId))
                    .col(integer(Sessoes::CinemaId))
                    .col(string(Sessoes::DataEHoraDaSessao))
                    .primary_key(Index::create().col(Sessoes::FilmeId).col(Sessoes::CinemaId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessoes_filme_id")
                            .from(Sessoes::Table, Sessoes::FilmeId)
                            .to(Filmes::Table, Filmes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessoes_cinema_id")
                            .from(Sessoes::Table, Sessoes::CinemaId)
                            .to(Cinemas::Table, Cinemas::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessoes_cinema_id")
                    .table(Sessoes::Table)
                    .col(Sessoes::CinemaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sessoes::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Filmes::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Cinemas::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Enderecos::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Enderecos {
    Table,
    Id,
    Logradouro,
    Numero,
}

#[derive(DeriveIden)]
enum Cinemas {
    Table,
    Id,
    Nome,
    EnderecoId,
}

#[derive(DeriveIden)]
enum Filmes {
    Table,
    Id,
    Titulo,
    Genero,
    Duracao,
}

#[derive(DeriveIden)]
enum Sessoes {
    Table,
    FilmeId,
    CinemaId,
    #[sea_orm(iden = "data_e_hora_da_sessao")]
    DataEHoraDaSessao,
}
