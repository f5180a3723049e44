use super::*;
use core::ptr::NonNull;

#[derive(Debug)]
struct TestNode {
  value: i32,
  link: Link<Self>,
}

impl Linked for TestNode {
  fn link(&self) -> &Link<Self> {
    &self.link
  }

  fn link_mut(&mut self) -> &mut Link<Self> {
    &mut self.link
  }
}

// Nodes live as leaked heap cells so the lists are the only way anything
// reaches them, mirroring how block headers are used.
fn node(value: i32) -> NonNull<TestNode> {
  NonNull::new(Box::into_raw(Box::new(TestNode {
    value,
    link: Link::new(),
  })))
  .unwrap()
}

fn value_of(node: NonNull<TestNode>) -> i32 {
  unsafe { node.as_ref() }.value
}

fn addresses(list: &OrderedList<TestNode>) -> Vec<usize> {
  list.iter().map(|n| n.as_ptr() as usize).collect()
}

#[test]
fn test_ordered_insert_sorts_by_address() {
  let nodes: Vec<NonNull<TestNode>> = (0..8).map(node).collect();
  let mut list = OrderedList::new();

  // Insertion order is scrambled on purpose.
  for i in [3, 0, 7, 1, 5, 2, 6, 4] {
    unsafe { list.insert(nodes[i]) };
  }

  assert_eq!(list.len(), 8);
  let addrs = addresses(&list);
  let mut sorted = addrs.clone();
  sorted.sort();
  assert_eq!(addrs, sorted);
}

#[test]
fn test_ordered_head_is_lowest_address() {
  let a = node(1);
  let b = node(2);
  let mut list = OrderedList::new();

  unsafe {
    list.insert(a);
    list.insert(b);
  }

  let lowest = a.min(b);
  assert_eq!(list.head(), Some(lowest));
  assert_eq!(unsafe { list.pop_head() }, Some(lowest));
  assert_eq!(list.len(), 1);
}

#[test]
fn test_ordered_remove_middle() {
  let nodes: Vec<NonNull<TestNode>> = (0..3).map(node).collect();
  let mut list = OrderedList::new();

  for n in &nodes {
    unsafe { list.insert(*n) };
  }

  let addrs = addresses(&list);
  let middle = NonNull::new(addrs[1] as *mut TestNode).unwrap();
  unsafe { list.remove(middle) };

  assert_eq!(list.len(), 2);
  assert_eq!(addresses(&list), vec![addrs[0], addrs[2]]);
  assert!(!unsafe { middle.as_ref() }.link().is_linked());
}

#[test]
fn test_ordered_remove_head() {
  let a = node(1);
  let b = node(2);
  let mut list = OrderedList::new();

  unsafe {
    list.insert(a);
    list.insert(b);
  }

  let head = list.head().unwrap();
  unsafe { list.remove(head) };

  assert_eq!(list.len(), 1);
  assert_ne!(list.head(), Some(head));
}

#[test]
fn test_ordered_pop_until_empty() {
  let nodes: Vec<NonNull<TestNode>> = (0..4).map(node).collect();
  let mut list = OrderedList::new();

  for n in &nodes {
    unsafe { list.insert(*n) };
  }

  let mut last = 0;
  while let Some(popped) = unsafe { list.pop_head() } {
    let addr = popped.as_ptr() as usize;
    assert!(addr > last);
    last = addr;
  }

  assert!(list.is_empty());
  assert_eq!(list.len(), 0);
}

#[test]
fn test_stack_push_is_lifo() {
  let nodes: Vec<NonNull<TestNode>> = (0..3).map(node).collect();
  let mut list = StackList::new();

  for n in &nodes {
    unsafe { list.push(*n) };
  }

  let values: Vec<i32> = list.iter().map(value_of).collect();
  assert_eq!(values, vec![2, 1, 0]);
  assert_eq!(list.head(), Some(nodes[2]));
}

#[test]
fn test_stack_remove_patches_neighbors() {
  let nodes: Vec<NonNull<TestNode>> = (0..3).map(node).collect();
  let mut list = StackList::new();

  for n in &nodes {
    unsafe { list.push(*n) };
  }

  unsafe { list.remove(nodes[1]) };

  let values: Vec<i32> = list.iter().map(value_of).collect();
  assert_eq!(values, vec![2, 0]);
  assert_eq!(list.len(), 2);

  unsafe { list.remove(nodes[2]) };
  assert_eq!(list.head(), Some(nodes[0]));

  unsafe { list.remove(nodes[0]) };
  assert!(list.is_empty());
}
