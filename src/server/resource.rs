//! Generic REST resource for one entity type
//!
//! `ResourceDescriptor<T>` exposes five routes for every entity:
//!
//! - `POST   /{plural}`       create (the body must not carry an id)
//! - `PUT    /{plural}`       update (the body must carry an id)
//! - `GET    /{plural}`       list, with `?filter=` and `?eagerload=`
//! - `GET    /{plural}/{id}`  get one
//! - `DELETE /{plural}/{id}`  delete

use crate::core::{ApiError, ApiResult, Entity, ListParams, Repository};
use crate::server::entity_registry::{EntityDescriptor, ResourceContext};
use crate::server::headers::HeaderUtil;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::marker::PhantomData;
use std::sync::Arc;

/// Descriptor registering the CRUD routes of `T`
pub struct ResourceDescriptor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> ResourceDescriptor<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> Default for ResourceDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityDescriptor for ResourceDescriptor<T> {
    fn entity_type(&self) -> &str {
        T::entity_name()
    }

    fn plural(&self) -> &str {
        T::resource_name()
    }

    fn table(&self) -> &str {
        T::table_name()
    }

    fn build_routes(&self, context: &ResourceContext) -> Router {
        let state = ResourceState::<T> {
            repository: Repository::new(context.store.clone()),
            headers: context.headers.clone(),
        };
        let plural = T::resource_name();

        Router::new()
            .route(
                &format!("/{}", plural),
                get(list_entities::<T>)
                    .post(create_entity::<T>)
                    .put(update_entity::<T>),
            )
            .route(
                &format!("/{}/{{id}}", plural),
                get(get_entity::<T>).delete(delete_entity::<T>),
            )
            .with_state(state)
    }
}

/// State shared by the handlers of one resource
pub struct ResourceState<T> {
    repository: Repository<T>,
    headers: Arc<HeaderUtil>,
}

impl<T> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            headers: self.headers.clone(),
        }
    }
}

impl<T: Entity> ResourceState<T> {
    /// Errors render with the `X-<app>-error` headers
    fn respond(&self, result: ApiResult<Response>) -> Response {
        result.unwrap_or_else(|err| {
            if err.status_code().is_server_error() {
                tracing::error!("{} request failed: {}", T::entity_name(), err);
            }
            err.into_response_for(self.headers.application_name())
        })
    }
}

fn parse_id(value: &str) -> ApiResult<i64> {
    value.parse().map_err(|_| ApiError::InvalidEntityId {
        value: value.to_string(),
    })
}

fn persisted_id<T: Entity>(entity: &T) -> ApiResult<i64> {
    entity.id().ok_or_else(|| ApiError::Storage {
        message: format!("{} was saved without an id", T::entity_name()),
    })
}

/// `POST /{plural}`
pub async fn create_entity<T: Entity>(
    State(state): State<ResourceState<T>>,
    body: Result<Json<T>, JsonRejection>,
) -> Response {
    tracing::debug!("REST request to save {}", T::entity_name());

    let result: ApiResult<Response> = async {
        let Json(entity) = body?;

        if entity.id().is_some() {
            return Err(ApiError::bad_request::<T>(
                format!("A new {} cannot already have an ID", T::entity_name()),
                "idexists",
            ));
        }

        let saved = state.repository.save(entity).await?;
        let id = persisted_id(&saved)?;

        let mut headers = state.headers.entity_creation_alert(T::entity_name(), id);
        let location = format!("/api/{}/{}", T::resource_name(), id);
        if let Ok(location) = HeaderValue::from_str(&location) {
            headers.insert(header::LOCATION, location);
        }

        Ok((StatusCode::CREATED, headers, Json(saved)).into_response())
    }
    .await;

    state.respond(result)
}

/// `PUT /{plural}`
pub async fn update_entity<T: Entity>(
    State(state): State<ResourceState<T>>,
    body: Result<Json<T>, JsonRejection>,
) -> Response {
    tracing::debug!("REST request to update {}", T::entity_name());

    let result: ApiResult<Response> = async {
        let Json(entity) = body?;

        match entity.id() {
            None => return Err(ApiError::bad_request::<T>("Invalid id", "idnull")),
            // Generated ids start at 1
            Some(id) if id <= 0 => {
                return Err(ApiError::bad_request::<T>("Invalid id", "idinvalid"));
            }
            Some(_) => {}
        }

        let saved = state.repository.save(entity).await?;
        let id = persisted_id(&saved)?;
        let headers = state.headers.entity_update_alert(T::entity_name(), id);

        Ok((StatusCode::OK, headers, Json(saved)).into_response())
    }
    .await;

    state.respond(result)
}

/// `GET /{plural}`
pub async fn list_entities<T: Entity>(
    State(state): State<ResourceState<T>>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Response {
    let result: ApiResult<Response> = async {
        let Query(params) = query?;

        if let Some(relation) = params.filter.as_deref().and_then(T::reverse_filter) {
            tracing::debug!(
                "REST request to get all {}s where {} is null",
                T::entity_name(),
                relation.owner
            );
            let entities = state.repository.find_all_where_reverse_is_null(relation).await?;
            return Ok(Json(entities).into_response());
        }

        tracing::debug!("REST request to get all {}s", T::entity_name());

        if !T::many_to_many().is_empty() && params.eagerload() {
            let rows = state.repository.find_all_with_eager_relationships().await?;
            return Ok(Json(rows).into_response());
        }

        let entities = state.repository.find_all().await?;
        Ok(Json(entities).into_response())
    }
    .await;

    state.respond(result)
}

/// `GET /{plural}/{id}`
pub async fn get_entity<T: Entity>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> Response {
    tracing::debug!("REST request to get {} : {}", T::entity_name(), id);

    let result: ApiResult<Response> = async {
        let id = parse_id(&id)?;

        if T::many_to_many().is_empty() {
            let entity = state
                .repository
                .find_one(id)
                .await?
                .ok_or_else(|| ApiError::not_found::<T>(id))?;
            return Ok(Json(entity).into_response());
        }

        let row = state
            .repository
            .find_one_with_eager_relationships(id)
            .await?
            .ok_or_else(|| ApiError::not_found::<T>(id))?;
        Ok(Json(row).into_response())
    }
    .await;

    state.respond(result)
}

/// `DELETE /{plural}/{id}`
pub async fn delete_entity<T: Entity>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> Response {
    tracing::debug!("REST request to delete {} : {}", T::entity_name(), id);

    let result: ApiResult<Response> = async {
        let id = parse_id(&id)?;
        state.repository.delete_by_id(id).await?;
        let headers = state.headers.entity_deletion_alert(T::entity_name(), id);

        Ok((StatusCode::NO_CONTENT, headers).into_response())
    }
    .await;

    state.respond(result)
}
