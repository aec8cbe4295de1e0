use model::{organisation::Organisation, WithId};
use registry::database::Result;
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{organisation::OrganisationRow, with_id, with_ids};

use super::convert_error;

pub async fn insert<'c, E>(
    executor: E,
    organisation: Organisation,
) -> Result<WithId<Organisation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO organisations(name)
        VALUES ($1)
        RETURNING id, name;
        ",
    )
    .bind(&organisation.name)
    .fetch_one(executor)
    .await
    .map(|row: OrganisationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get<'c, E>(executor: E, id: Id<Organisation>) -> Result<WithId<Organisation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name
        FROM organisations
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: OrganisationRow| with_id(row))
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Organisation>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, name
        FROM organisations
        ORDER BY id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|organisations: Vec<OrganisationRow>| Ok(with_ids(organisations)))
}
