use meshvox3d::bounding_volume::Aabb;
use meshvox3d::math::{Point, Real, Vector};
use meshvox3d::partitioning::AabbTree;

fn unit_box_at(x: Real) -> Aabb {
    let mins = Point::new(x, 0.0, 0.0);
    Aabb::new(mins, mins + Vector::repeat(1.0))
}

#[test]
fn query_between_distant_boxes() {
    let tree: AabbTree<u32> = [0.0, 5.0, 10.0]
        .into_iter()
        .enumerate()
        .map(|(i, x)| (unit_box_at(x), i as u32))
        .collect();

    assert_eq!(tree.len(), 3);
    let _ = tree.assert_well_formed();

    let query = Aabb::new(Point::new(4.0, -1.0, -1.0), Point::new(6.0, 1.0, 1.0));
    assert_eq!(tree.search_vec(&query), vec![&1]);

    let everything = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(12.0, 2.0, 2.0));
    let mut all = tree.search_vec(&everything);
    all.sort();
    assert_eq!(all, vec![&0, &1, &2]);

    let nothing = Aabb::new(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 1.0, 1.0));
    assert!(tree.search(&nothing).next().is_none());
}

#[test]
fn identical_query_finds_the_box() {
    let tree: AabbTree<u32> = (0..8)
        .map(|i| (unit_box_at(i as Real * 3.0), i))
        .collect();

    for i in 0..8 {
        let query = unit_box_at(i as Real * 3.0);
        assert_eq!(tree.search_vec(&query), vec![&i]);
    }
}
