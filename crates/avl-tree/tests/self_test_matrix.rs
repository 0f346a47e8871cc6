use algs_avl::{run_with_banner, self_tests, AvlSelfTest, Scenario, SelfTest};

fn run(test: &mut dyn SelfTest) -> String {
    let mut out = Vec::new();
    test.run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn custom_scenario_matrix() {
    let mut test = AvlSelfTest::with_scenario(Scenario {
        insert: vec![1, 2, 3, 4, 5, 6, 7],
        delete: vec![4, 99],
    });
    let out = run(&mut test);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Preorder traversal of constructed tree is:",
            "4 2 1 3 6 5 7",
            "inorder traversal of constructed tree is:",
            "1 2 3 4 5 6 7",
            "Tree after deleting 4 & 99:",
            "1 2 3 5 6 7",
        ]
    );
    test.tree().assert_valid().unwrap();
    assert_eq!(test.tree().len(), 6);
}

#[test]
fn registry_run_matrix() {
    let mut out = Vec::new();
    for mut test in self_tests() {
        run_with_banner(test.as_mut(), &mut out).unwrap();
    }
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches(">>> AvlTree").count(), 1);
    assert!(out.contains("25 10 20 40 30 50\n"));
    assert!(out.contains("Tree after deleting 20 & 40:\n10 25 30 50\n<<< AvlTree\n"));
}
