//! 엔티티 식별자 생성

use uuid::Uuid;

/// 시간 순으로 정렬되는 UUID v7 문자열을 생성합니다.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
