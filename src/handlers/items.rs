use actix_web::http::header;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::domain::item::Item;
use crate::domain::ports::AsyncItemRepository;
use crate::errors::AppError;

use super::dto::{CreateItemDto, ReadItemDto, UpdateItemDto};

pub type Repo = web::Data<dyn AsyncItemRepository>;

/// GET /items
///
/// Returns every item in the catalog, in no particular order.
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items", body = [ReadItemDto]),
        (status = 503, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn list_items(repo: Repo) -> Result<HttpResponse, AppError> {
    let items: Vec<ReadItemDto> = repo
        .list()
        .await?
        .into_iter()
        .map(ReadItemDto::from)
        .collect();

    log::debug!("Retrieved {} items", items.len());
    Ok(HttpResponse::Ok().json(items))
}

/// GET /items/{id}
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item UUID"),
    ),
    responses(
        (status = 200, description = "Item found", body = ReadItemDto),
        (status = 404, description = "Item not found"),
        (status = 503, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn get_item(repo: Repo, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match repo.get(id).await? {
        Some(item) => Ok(HttpResponse::Ok().json(ReadItemDto::from(item))),
        None => Err(AppError::NotFound),
    }
}

/// POST /items
///
/// Validates the payload, assigns a fresh id and creation time, and stores
/// the item. The response carries a `Location` header for the new resource.
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ReadItemDto),
        (status = 400, description = "Invalid payload"),
        (status = 503, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn create_item(
    repo: Repo,
    body: web::Json<CreateItemDto>,
) -> Result<HttpResponse, AppError> {
    let (name, price) = body.into_inner().validate()?;

    let item = Item::new(name, price);
    repo.create(&item).await?;

    log::info!("Created item {}", item.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/items/{}", item.id)))
        .json(ReadItemDto::from(item)))
}

/// PUT /items/{id}
///
/// Replaces the name and price of an existing item. The id and creation time
/// never change.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item UUID"),
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Item not found"),
        (status = 503, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn update_item(
    repo: Repo,
    path: web::Path<Uuid>,
    body: web::Json<UpdateItemDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let (name, price) = body.into_inner().validate()?;

    let existing = repo.get(id).await?.ok_or(AppError::NotFound)?;
    let updated = existing.with_details(name, price);

    // A concurrent delete may land between the lookup and the replace.
    if !repo.update(&updated).await? {
        return Err(AppError::NotFound);
    }

    log::info!("Updated item {}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /items/{id}
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item UUID"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found"),
        (status = 503, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn delete_item(repo: Repo, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if repo.get(id).await?.is_none() || !repo.delete(id).await? {
        return Err(AppError::NotFound);
    }

    log::info!("Deleted item {}", id);
    Ok(HttpResponse::NoContent().finish())
}
