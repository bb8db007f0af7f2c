//! 암호학적으로 안전한 랜덤 문자열 생성
//!
//! `rand::rng()`는 OS 엔트로피로 시드되고 주기적으로 재시드되는 ChaCha 기반 CSPRNG입니다.

use rand::Rng;

/// 임시 비밀번호용 문자 집합 (혼동하기 쉬운 `0 O 1 l I` 제외)
const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!#$%&*+-=?@^_";

/// 토큰/클라이언트 자격 증명용 문자 집합 (URL에 그대로 넣을 수 있는 문자만)
const TOKEN_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// 사람이 입력할 임시 비밀번호를 생성합니다.
pub fn generate_password(length: usize) -> String {
    random_string(PASSWORD_CHARSET, length)
}

/// 액세스 토큰, 인가 코드, 클라이언트 시크릿 등에 쓰는 랜덤 문자열을 생성합니다.
pub fn generate_token(length: usize) -> String {
    random_string(TOKEN_CHARSET, length)
}

fn random_string(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}
