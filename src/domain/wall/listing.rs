//! 벽 목록 조회 파라미터 해석 (페이지, 정렬, 검색)

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};

use super::entity::wall;
use crate::utils::error::AppError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// 1부터 시작하는 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

/// 전체 건수에 대한 현재 페이지의 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total_page: u64,
    pub next: bool,
    pub previous: bool,
}

impl PageRequest {
    pub fn from_query(page: Option<i64>, page_size: Option<i64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(AppError::bad_request("Invalid page."));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(format!(
                "page_size must be between 1 and {}.",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            page: page as u64,
            page_size: page_size as u64,
        })
    }

    /// 0부터 시작하는 페이지 인덱스 (Paginator::fetch_page 용)
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// 결과가 없어도 1페이지는 유효합니다. 마지막 페이지를 넘으면 에러.
    pub fn window(&self, count: u64) -> Result<PageWindow, AppError> {
        let total_page = count.div_ceil(self.page_size).max(1);

        if self.page > total_page {
            return Err(AppError::bad_request("Invalid page."));
        }

        Ok(PageWindow {
            total_page,
            next: self.page < total_page,
            previous: self.page > 1,
        })
    }
}

/// 정렬 가능한 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Content,
    CreatedOn,
    ModifiedOn,
}

impl SortField {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(str::trim).unwrap_or("created_on") {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            "created_on" => Ok(SortField::CreatedOn),
            "modified_on" => Ok(SortField::ModifiedOn),
            other => Err(AppError::bad_request(format!(
                "Cannot sort by '{}'. Choices are: id, title, content, created_on, modified_on.",
                other
            ))),
        }
    }

    pub fn column(self) -> wall::Column {
        match self {
            SortField::Id => wall::Column::WallId,
            SortField::Title => wall::Column::Title,
            SortField::Content => wall::Column::Content,
            SortField::CreatedOn => wall::Column::CreatedOn,
            SortField::ModifiedOn => wall::Column::ModifiedOn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// "desc"(기본값)만 내림차순, 그 외 값은 모두 오름차순
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("desc") => SortOrder::Desc,
            Some(_) => SortOrder::Asc,
        }
    }
}

/// 검색어 정규화. 공백뿐인 검색어는 검색하지 않은 것으로 봅니다.
///
/// SQLite의 `LOWER()`는 ASCII만 소문자로 바꾸므로 검색어도 ASCII만 접습니다.
/// 따라서 SQLite에서는 "é"로 "École"을 찾지 못합니다 (MySQL은 콜레이션이 처리).
pub fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_lowercase)
}

/// 제목 대소문자 무시 부분 일치 조건 (LIKE 와일드카드 이스케이프)
pub fn title_contains(search: &str) -> SimpleExpr {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Expr::expr(Func::lower(Expr::col((wall::Entity, wall::Column::Title))))
        .like(LikeExpr::new(format!("%{}%", escaped)).escape('\\'))
}
