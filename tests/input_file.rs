use xfem_crack::{Crack, CrackInputFile, DofPoolSizing, DomainId, XfemManagerId, intersect_all};
use approx::assert_relative_eq;

fn load_cracks() -> Vec<Crack> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/crack_branching.toml");
    let input = CrackInputFile::from_file(path).expect("sample input parses");
    input
        .cracks
        .iter()
        .enumerate()
        .map(|(i, record)| Crack::from_record(i + 1, XfemManagerId(0), DomainId(0), record).unwrap())
        .collect()
}

#[test]
fn test_sample_input_builds_cracks() {
    let cracks = load_cracks();
    assert_eq!(cracks.len(), 2);
    // 2 Heaviside + 2 tips * 2 components * 4 branch functions
    assert_eq!(cracks[0].dof_pool_size(), 18);
    assert_eq!(cracks[1].dof_pool_size(), 10);
}

#[test]
fn test_sample_branch_is_detected() {
    let cracks = load_cracks();
    let hits = intersect_all(&cracks);
    assert_eq!(hits.len(), 1);

    // The branch passes through a vertex of the first crack, which is
    // reported once per adjacent segment
    let result = &hits[0].result;
    assert_eq!(result.len(), 2);
    let vertex_arc = cracks[0].compute_arc_points(&[result.intersections[0].point])[0];
    for x in &result.intersections {
        assert_relative_eq!(x.point.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(x.point.y, 0.1, epsilon = 1e-9);
        assert_relative_eq!(x.arc_position, vertex_arc, epsilon = 1e-9);
        assert_relative_eq!(x.other_arc_position, 1.1, epsilon = 1e-9);
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = CrackInputFile::from_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, xfem_crack::CrackError::Io(_)));
}
