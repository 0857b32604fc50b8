use keyset::balanced::Tree;
use keyset::Key;

fn tree_of(keys: &[Key]) -> Tree {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

fn prefix(tree: &Tree) -> Vec<Key> {
    tree.prefix().collect()
}

#[test]
fn single_left_rotation() {
    let tree = tree_of(&[10, 20, 30]);

    assert_eq!(tree.infix().collect::<Vec<_>>(), [10, 20, 30]);
    assert_eq!(prefix(&tree), [20, 10, 30]);
}

#[test]
fn single_right_rotation() {
    assert_eq!(prefix(&tree_of(&[30, 20, 10])), [20, 10, 30]);
}

#[test]
fn left_right_rotation() {
    assert_eq!(prefix(&tree_of(&[30, 10, 20])), [20, 10, 30]);
}

#[test]
fn remove_node_with_two_children() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

    tree.remove(3);

    assert!(!tree.find(3));
    assert!(tree.find(4));
    assert_eq!(tree.infix().collect::<Vec<_>>(), [1, 4, 5, 7, 8, 9]);
}

#[test]
fn empty_tree_is_inert() {
    let mut tree = Tree::new();

    assert!(!tree.find(17));
    tree.remove(17);
    assert!(tree.is_empty());
    assert_eq!(tree.infix().count(), 0);
    assert_eq!(tree.prefix().count(), 0);
    assert_eq!(tree.postfix().count(), 0);
}

#[test]
fn traversals_restart_from_current_state() {
    let mut tree = tree_of(&[2, 1, 3]);
    assert_eq!(tree.postfix().collect::<Vec<_>>(), [1, 3, 2]);

    tree.insert(4);
    assert_eq!(tree.postfix().collect::<Vec<_>>(), [1, 4, 3, 2]);
}

quickcheck::quickcheck! {
    fn infix_is_strictly_ascending(xs: Vec<Key>, deletes: Vec<Key>) -> bool {
        let mut tree = tree_of(&xs);
        for delete in &deletes {
            tree.remove(*delete);
        }

        let keys: Vec<_> = tree.infix().collect();
        keys.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn round_trip(xs: Vec<Key>, k: Key) -> bool {
        let mut tree = tree_of(&xs);

        tree.insert(k);
        let found = tree.find(k);
        tree.remove(k);

        found
            && !tree.find(k)
            && tree.infix().all(|x| x != k)
            && tree.prefix().all(|x| x != k)
            && tree.postfix().all(|x| x != k)
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<Key>) -> bool {
        let mut tree = tree_of(&xs);
        let before: Vec<_> = tree.prefix().collect();
        let len = tree.len();

        for x in &xs {
            tree.insert(*x);
        }

        tree.prefix().eq(before) && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn height_is_bounded(xs: Vec<Key>) -> bool {
        let tree = tree_of(&xs);
        let n = tree.len() as f64;

        tree.height() <= (1.44 * (n + 2.0).log2()).ceil() as usize
    }
}
