//! Marketing content handlers
//!
//! Articles, reviews and team members share one set of generic admin
//! handlers; `ContentResource` supplies the per-kind wire types and service.
//! The public homepage endpoint lives here too.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::pricing::PricingPlanResponse;
use super::wire::{PublicationRequest, RecordStateResponse};
use crate::domain::entities::{
    Article, ArticleDraft, ContentId, MarketingContent, Review, ReviewDraft, TeamMember,
    TeamMemberDraft,
};
use crate::error::AppError;
use crate::{AppState, DynContentService};

/// A content kind exposed over HTTP
pub trait ContentResource: MarketingContent {
    type Request: DeserializeOwned + Send + 'static;
    type Response: Serialize + From<Self> + Send;

    /// Admin list path; target of every write redirect
    const COLLECTION_PATH: &'static str;

    fn service(state: &AppState) -> &DynContentService<Self>;

    fn into_draft(request: Self::Request) -> Self::Draft;
}

// ============================================================================
// Generic admin handlers
// ============================================================================

/// GET /admin/marketing/{articles,reviews,team}
pub async fn list_content<C: ContentResource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<C::Response>>, AppError> {
    let items = C::service(&state).list().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// GET /admin/marketing/{articles,reviews,team}/:id
pub async fn get_content<C: ContentResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<C::Response>, AppError> {
    let item = C::service(&state).get(ContentId(id)).await?;
    Ok(Json(item.into()))
}

/// POST /admin/marketing/{articles,reviews,team}
///
/// Responds 302 to the collection.
pub async fn create_content<C: ContentResource>(
    State(state): State<AppState>,
    Json(req): Json<C::Request>,
) -> Result<Response, AppError> {
    C::service(&state).create(C::into_draft(req)).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, C::COLLECTION_PATH)]).into_response())
}

/// PUT /admin/marketing/{articles,reviews,team}/:id
///
/// Full replacement of the editable fields. Responds 303 to the collection.
pub async fn update_content<C: ContentResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<C::Request>,
) -> Result<Redirect, AppError> {
    C::service(&state)
        .update(ContentId(id), C::into_draft(req))
        .await?;
    Ok(Redirect::to(C::COLLECTION_PATH))
}

/// DELETE /admin/marketing/{articles,reviews,team}/:id
pub async fn delete_content<C: ContentResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    C::service(&state).delete(ContentId(id)).await?;
    Ok(Redirect::to(C::COLLECTION_PATH))
}

// ============================================================================
// Articles
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArticleRequest {
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub reading_time: Option<i32>,
    pub home_component_id: Option<String>,
    #[serde(flatten)]
    pub publication: PublicationRequest,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub reading_time: Option<i32>,
    pub home_component_id: Option<String>,
    #[serde(flatten)]
    pub state: RecordStateResponse,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.0,
            state: RecordStateResponse::new(&article.publication, &article.timestamps),
            title: article.title,
            content: article.content,
            image_url: article.image_url,
            author: article.author,
            reading_time: article.reading_time,
            home_component_id: article.home_component_id,
        }
    }
}

impl ContentResource for Article {
    type Request = ArticleRequest;
    type Response = ArticleResponse;

    const COLLECTION_PATH: &'static str = "/admin/marketing/articles";

    fn service(state: &AppState) -> &DynContentService<Self> {
        &state.article_service
    }

    fn into_draft(req: ArticleRequest) -> ArticleDraft {
        ArticleDraft {
            title: req.title,
            content: req.content,
            image_url: req.image_url,
            author: req.author,
            reading_time: req.reading_time,
            home_component_id: req.home_component_id,
            publication: req.publication.into(),
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReviewRequest {
    pub author: String,
    pub content: String,
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub publication: PublicationRequest,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub state: RecordStateResponse,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.0,
            state: RecordStateResponse::new(&review.publication, &review.timestamps),
            author: review.author,
            content: review.content,
            avatar_url: review.avatar_url,
        }
    }
}

impl ContentResource for Review {
    type Request = ReviewRequest;
    type Response = ReviewResponse;

    const COLLECTION_PATH: &'static str = "/admin/marketing/reviews";

    fn service(state: &AppState) -> &DynContentService<Self> {
        &state.review_service
    }

    fn into_draft(req: ReviewRequest) -> ReviewDraft {
        ReviewDraft {
            author: req.author,
            content: req.content,
            avatar_url: req.avatar_url,
            publication: req.publication.into(),
        }
    }
}

// ============================================================================
// Team
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TeamMemberRequest {
    #[serde(rename = "firstName", alias = "first_name")]
    pub first_name: String,
    #[serde(rename = "lastName", alias = "last_name")]
    pub last_name: String,
    pub site_role: Option<String>,
    pub system_role: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub publication: PublicationRequest,
}

/// Names keep the camelCase keys the site frontend reads
#[derive(Debug, Serialize)]
pub struct TeamMemberResponse {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub site_role: Option<String>,
    pub system_role: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub state: RecordStateResponse,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id.0,
            full_name: member.full_name(),
            state: RecordStateResponse::new(&member.publication, &member.timestamps),
            first_name: member.first_name,
            last_name: member.last_name,
            site_role: member.site_role,
            system_role: member.system_role,
            avatar_url: member.avatar_url,
        }
    }
}

impl ContentResource for TeamMember {
    type Request = TeamMemberRequest;
    type Response = TeamMemberResponse;

    const COLLECTION_PATH: &'static str = "/admin/marketing/team";

    fn service(state: &AppState) -> &DynContentService<Self> {
        &state.team_service
    }

    fn into_draft(req: TeamMemberRequest) -> TeamMemberDraft {
        TeamMemberDraft {
            first_name: req.first_name,
            last_name: req.last_name,
            site_role: req.site_role,
            system_role: req.system_role,
            avatar_url: req.avatar_url,
            publication: req.publication.into(),
        }
    }
}

// ============================================================================
// Public homepage
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HomepageResponse {
    pub articles: Vec<ArticleResponse>,
    pub reviews: Vec<ReviewResponse>,
    pub team: Vec<TeamMemberResponse>,
    pub pricing_plans: Vec<PricingPlanResponse>,
}

/// GET /marketing/home
///
/// Published content flagged for the homepage, plus every pricing plan.
pub async fn homepage(State(state): State<AppState>) -> Result<Json<HomepageResponse>, AppError> {
    let (articles, reviews, team, plans) = tokio::try_join!(
        state.article_service.list_homepage(),
        state.review_service.list_homepage(),
        state.team_service.list_homepage(),
        state.pricing_service.list(),
    )?;

    Ok(Json(HomepageResponse {
        articles: articles.into_iter().map(Into::into).collect(),
        reviews: reviews.into_iter().map(Into::into).collect(),
        team: team.into_iter().map(Into::into).collect(),
        pricing_plans: plans.into_iter().map(Into::into).collect(),
    }))
}
