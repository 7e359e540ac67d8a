//! End-to-end ragdoll setup scenarios on the in-memory host

use approx::assert_relative_eq;
use ragdoll_rig::prelude::*;
use std::f32::consts::FRAC_PI_2;

fn humanoid_legs() -> NodeDescription {
    let leg = |side: &str, x: f32| {
        NodeDescription::new(format!("{side}UpperLeg"))
            .with_transform(Transform::from_position(Vec3::new(x, -0.1, 0.0)))
            .with_collider(Collider::capsule(0.08, 0.4, Axis::Y, Vec3::new(0.0, -0.2, 0.0)))
            .with_child(
                NodeDescription::new(format!("{side}LowerLeg"))
                    .with_transform(Transform::from_position(Vec3::new(0.0, -0.45, 0.0)))
                    .with_collider(Collider::capsule(0.06, 0.4, Axis::Y, Vec3::new(0.0, -0.2, 0.0)))
                    .with_child(
                        NodeDescription::new(format!("{side}Foot"))
                            .with_transform(Transform::from_position(Vec3::new(0.0, -0.42, 0.05))),
                    ),
            )
    };

    NodeDescription::new("Hips")
        .with_transform(Transform::from_position(Vec3::new(0.0, 1.0, 0.0)))
        .with_collider(Collider::cuboid(Vec3::new(0.3, 0.2, 0.2), Vec3::zeros()))
        .with_child(leg("Left", -0.1))
        .with_child(leg("Right", 0.1))
}

#[test]
fn rotator_scenario_moves_unit_box() {
    let helper = RagdollHelper::default();
    let mut tree = NodeTree::new();
    let bone = tree.add_root("B", Transform::identity());
    let unit_box = Collider::cuboid(Vec3::new(1.0, 1.0, 1.0), Vec3::zeros());
    tree.attach_collider(bone, unit_box);

    let rotator = helper
        .get_or_create_rotator_node(&mut tree, &mut NoJournal, bone)
        .expect("box bone");

    assert_eq!(tree.name(rotator), Some("B_ColliderRotator"));
    assert_eq!(tree.parent(rotator), Some(bone));
    assert_eq!(tree.local_transform(rotator), Some(Transform::identity()));
    assert_eq!(tree.collider(rotator), Some(&unit_box));
    assert!(tree.collider(bone).is_none());
}

#[test]
fn rotator_creation_is_idempotent() {
    let helper = RagdollHelper::default();
    let mut tree = NodeTree::new();
    let hips = tree.spawn(&humanoid_legs(), None).expect("root spawn");
    let mut journal = UndoStack::new();

    let first = helper
        .get_or_create_rotator_node(&mut tree, &mut journal, hips)
        .expect("box bone");
    let recorded = journal.len();
    let second = helper
        .get_or_create_rotator_node(&mut tree, &mut journal, hips)
        .expect("existing rotator");

    assert_eq!(first, second);
    assert!(tree.collider(hips).is_none());
    assert_eq!(journal.len(), recorded);
    assert_eq!(tree.children(hips).len(), 3);
}

#[test]
fn undoing_rotator_creation_restores_the_rig() {
    ragdoll_rig::foundation::logging::init();
    let helper = RagdollHelper::default();
    let mut tree = NodeTree::new();
    let hips = tree.spawn(&humanoid_legs(), None).expect("root spawn");
    let original = tree.describe(hips).expect("known root");
    let mut journal = UndoStack::new();

    journal.begin_group("Rotate hips collider");
    let rotator = helper
        .get_or_create_rotator_node(&mut tree, &mut journal, hips)
        .expect("box bone");
    let turn = Quat::from_axis_angle(&Vec3::y_axis(), 0.4);
    helper
        .rotate_collider_preserving_position(&mut tree, &mut journal, rotator, turn)
        .expect("box collider");
    journal.end_group();

    assert_eq!(journal.undo_group(&mut tree).as_deref(), Some("Rotate hips collider"));
    assert_eq!(tree.describe(hips), Some(original));
    assert!(tree.get(rotator).is_none());
}

#[test]
fn rotating_through_rotator_leaves_bone_untouched() {
    ragdoll_rig::foundation::logging::init();
    let helper = RagdollHelper::default();
    let mut tree = NodeTree::new();
    let hips = tree.spawn(&humanoid_legs(), None).expect("root spawn");
    let knee = tree.find_path(hips, "LeftUpperLeg/LeftLowerLeg").expect("lower leg");
    let bone_transform = tree.local_transform(knee);
    let center = helper.collider_world_position(&tree, knee).expect("capsule");

    let rotator = helper
        .get_or_create_rotator_node(&mut tree, &mut NoJournal, knee)
        .expect("capsule bone");
    let rotation = Quat::from_axis_angle(&Vec3::x_axis(), FRAC_PI_2);
    helper
        .rotate_collider_preserving_position(&mut tree, &mut NoJournal, rotator, rotation)
        .expect("capsule");

    assert_eq!(tree.local_transform(knee), bone_transform);
    assert_relative_eq!(tree.world_rotation(rotator).expect("rotator"), rotation, epsilon = 1e-6);
    assert_relative_eq!(helper.collider_world_position(&tree, knee).expect("capsule"), center, epsilon = 1e-5);
    assert_relative_eq!(helper.collider_world_rotation(&tree, knee).expect("capsule"), rotation, epsilon = 1e-6);
}

#[test]
fn capsule_direction_follows_longest_reach() {
    let mut tree = NodeTree::new();
    let hips = tree.spawn(&humanoid_legs(), None).expect("root spawn");
    let thigh = tree.find_path(hips, "RightUpperLeg").expect("thigh");
    let foot = tree.find_path(hips, "RightUpperLeg/RightLowerLeg/RightFoot").expect("foot");

    let farthest = find_farthest_descendant(&tree, thigh).expect("known bone");
    assert_eq!(farthest, foot);

    let reach = tree.world_position(farthest).expect("foot") - tree.world_position(thigh).expect("thigh");
    assert_eq!(dominant_axis(&reach), Axis::Y);
    assert_eq!(dominant_axis(&reach).index(), 1);
    assert_eq!(dominant_axis_unit_vector(&reach), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn lenient_and_strict_centers_stay_distinct() {
    let helper = RagdollHelper::default();
    let mut tree = NodeTree::new();
    let chest = tree.add_root("Chest", Transform::from_position(Vec3::new(0.0, 1.3, 0.0)));
    let ribcage = [
        Vec3::new(-0.2, -0.05, 0.0),
        Vec3::new(0.2, 0.1, -0.1),
        Vec3::new(0.0, 0.25, 0.1),
        Vec3::new(0.05, 0.0, 0.08),
    ];
    let bounds = Aabb::from_points(&ribcage).expect("baked vertices");
    tree.attach_collider(chest, Collider::mesh(Some(bounds)));

    assert_relative_eq!(
        helper.collider_center_world(&tree, chest).expect("lenient"),
        Point3::new(0.0, 1.4, 0.0),
        epsilon = 1e-6
    );
    assert_eq!(
        helper.collider_world_position(&tree, chest),
        Err(RigError::UnsupportedShape {
            shape: ShapeKind::Mesh,
            operation: "collider_world_position",
        })
    );
    assert!(matches!(
        helper.get_or_create_rotator_node(&mut tree, &mut NoJournal, chest),
        Err(RigError::UnsupportedShape { shape: ShapeKind::Mesh, .. })
    ));
}
