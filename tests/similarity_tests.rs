use logtriage::similarity;

fn msgs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| (*t).to_string()).collect()
}

#[test]
fn identical_messages_have_unit_similarity() {
    let m = msgs(&["connection refused by upstream", "connection refused by upstream"]);
    let vectors = similarity::vectorize(&m, 1000);
    let matrix = similarity::similarity_matrix(&vectors);
    assert!((matrix[0][1] - 1.0).abs() < 1e-9);
    assert!((matrix[1][0] - 1.0).abs() < 1e-9);
}

#[test]
fn disjoint_messages_have_zero_similarity() {
    let m = msgs(&["disk quota exceeded", "certificate expired yesterday"]);
    let vectors = similarity::vectorize(&m, 1000);
    let matrix = similarity::similarity_matrix(&vectors);
    assert_eq!(matrix[0][1], 0.0);
}

#[test]
fn diagonal_is_one_even_for_stop_word_only_message() {
    // Every token is a stop word, so the vector is empty; the diagonal is
    // still pinned to 1.0 so the message matches itself.
    let m = msgs(&["this was about that", "disk quota exceeded"]);
    let vectors = similarity::vectorize(&m, 1000);
    assert!(vectors[0].is_empty());
    let matrix = similarity::similarity_matrix(&vectors);
    assert_eq!(matrix[0][0], 1.0);
    assert_eq!(matrix[0][1], 0.0);
}

#[test]
fn matrix_is_symmetric() {
    let m = msgs(&[
        "database connection timeout",
        "database connection refused",
        "cache miss on warm path",
    ]);
    let vectors = similarity::vectorize(&m, 1000);
    let matrix = similarity::similarity_matrix(&vectors);
    for i in 0..m.len() {
        for j in 0..m.len() {
            assert!((matrix[i][j] - matrix[j][i]).abs() < 1e-12);
        }
    }
}

#[test]
fn vocabulary_cap_bounds_vector_dimensions() {
    let m = msgs(&["alpha beta gamma delta", "epsilon zeta eta theta"]);
    let vectors = similarity::vectorize(&m, 3);
    for v in &vectors {
        assert!(v.len() <= 3);
    }
    // With a roomy cap every message keeps all of its terms.
    let full = similarity::vectorize(&m, 1000);
    assert!(full.iter().all(|v| !v.is_empty()));
}
