use crate::domain::wall::entity::reaction_set::ReactionKind;

/// (벽, 사용자) 쌍의 반응 상태
///
/// 좋아요 집합과 싫어요 집합에 동시에 속하는 상태는 표현할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionState {
    Neutral,
    Liked,
    Disliked,
}

impl ReactionState {
    /// 현재 속한 반응 집합으로부터 상태 복원
    pub fn from_membership(kind: Option<ReactionKind>) -> Self {
        match kind {
            None => ReactionState::Neutral,
            Some(ReactionKind::Like) => ReactionState::Liked,
            Some(ReactionKind::Dislike) => ReactionState::Disliked,
        }
    }

    /// 이 상태에서 사용자가 속해야 할 반응 집합
    pub fn membership(self) -> Option<ReactionKind> {
        match self {
            ReactionState::Neutral => None,
            ReactionState::Liked => Some(ReactionKind::Like),
            ReactionState::Disliked => Some(ReactionKind::Dislike),
        }
    }

    /// 같은 종류를 다시 누르면 해제, 아니면 그 종류로 전환 (반대 반응은 해제됨)
    pub fn toggle(self, action: ReactionKind) -> Self {
        if self.membership() == Some(action) {
            ReactionState::Neutral
        } else {
            ReactionState::from_membership(Some(action))
        }
    }
}
