// Pseudocode listings shown beside the visualization

use super::Algorithm;
use crate::bst::BstOperation;

const BUBBLE_SORT: &[&str] = &[
    "function bubbleSort(array):",
    "  n = array.length",
    "  for i from 0 to n - 2:",
    "    for j from 0 to n - 2 - i:",
    "      // Compare array[j] and array[j+1]",
    "      if array[j] > array[j+1]:",
    "        swap(array[j], array[j+1])",
    "    // Position n - 1 - i is final",
    "    if no swaps this pass: stop",
    "  return array",
];

const SELECTION_SORT: &[&str] = &[
    "function selectionSort(array):",
    "  n = array.length",
    "  for i from 0 to n - 2:",
    "    minIndex = i",
    "    for j from i + 1 to n - 1:",
    "      if array[j] < array[minIndex]:",
    "        minIndex = j",
    "    if minIndex is not i:",
    "      swap(array[i], array[minIndex])",
    "    // Position i is final",
    "  return array",
];

const MERGE_SORT: &[&str] = &[
    "function mergeSort(array, start, end):",
    "  if end - start <= 1: return",
    "  mid = floor((start + end) / 2)",
    "  mergeSort(array, start, mid)",
    "  mergeSort(array, mid, end)",
    "  merge(array, start, mid, end)",
    "",
    "function merge(array, start, mid, end):",
    "  left = array[start...mid]",
    "  right = array[mid...end]",
    "  while left and right are not empty:",
    "    if left[0] <= right[0]:",
    "      place left.shift()",
    "    else:",
    "      place right.shift()",
    "  place remaining left, then right",
];

const QUICK_SORT: &[&str] = &[
    "function quickSort(array, low, high):",
    "  if low < high:",
    "    pi = partition(array, low, high)",
    "    quickSort(array, low, pi - 1)",
    "    quickSort(array, pi + 1, high)",
    "",
    "function partition(array, low, high):",
    "  pivot = array[high]",
    "  i = low - 1",
    "  for j from low to high - 1:",
    "    if array[j] < pivot:",
    "      i++",
    "      swap(array[i], array[j])",
    "  swap(array[i+1], array[high])",
    "  return i + 1",
];

const SHELL_SORT: &[&str] = &[
    "function shellSort(array):",
    "  n = array.length",
    "  gap = floor(n / 2)",
    "  while gap > 0:",
    "    for i from gap to n - 1:",
    "      temp = array[i]",
    "      j = i",
    "      while j >= gap and array[j - gap] > temp:",
    "        array[j] = array[j - gap]",
    "        j = j - gap",
    "      array[j] = temp",
    "    gap = floor(gap / 2)",
];

const LINEAR_SEARCH: &[&str] = &[
    "function linearSearch(array, target):",
    "  n = array.length",
    "  for i from 0 to n - 1:",
    "    if array[i] == target:",
    "      return i",
    "  return -1",
];

const BINARY_SEARCH: &[&str] = &[
    "function binarySearch(array, target):",
    "  // array must be sorted",
    "  low = 0",
    "  high = array.length - 1",
    "  while low <= high:",
    "    mid = floor((low + high) / 2)",
    "    if array[mid] == target:",
    "      return mid",
    "    else if array[mid] < target:",
    "      low = mid + 1",
    "    else:",
    "      high = mid - 1",
    "  return -1",
];

const BST_INSERT: &[&str] = &[
    "function insert(node, value):",
    "  if node is null:",
    "    return new Node(value)",
    "  if value < node.value:",
    "    node.left = insert(node.left, value)",
    "  else if value > node.value:",
    "    node.right = insert(node.right, value)",
    "  return node",
];

const BST_SEARCH: &[&str] = &[
    "function search(node, value):",
    "  if node is null or node.value == value:",
    "    return node",
    "  if value < node.value:",
    "    return search(node.left, value)",
    "  else:",
    "    return search(node.right, value)",
];

const BST_DELETE: &[&str] = &[
    "function delete(node, value):",
    "  if node is null: return node",
    "  if value < node.value:",
    "    node.left = delete(node.left, value)",
    "  else if value > node.value:",
    "    node.right = delete(node.right, value)",
    "  else:",
    "    if node has at most one child: return that child",
    "    successor = min(node.right)",
    "    node.value = successor.value",
    "    node.right = delete(node.right, successor.value)",
    "  return node",
];

pub fn for_algorithm(algorithm: Algorithm) -> &'static [&'static str] {
    match algorithm {
        Algorithm::BubbleSort => BUBBLE_SORT,
        Algorithm::SelectionSort => SELECTION_SORT,
        Algorithm::MergeSort => MERGE_SORT,
        Algorithm::QuickSort => QUICK_SORT,
        Algorithm::ShellSort => SHELL_SORT,
        Algorithm::LinearSearch => LINEAR_SEARCH,
        Algorithm::BinarySearch => BINARY_SEARCH,
        Algorithm::BstInsert => BST_INSERT,
        Algorithm::BstSearch => BST_SEARCH,
    }
}

/// Listing for a tree operation; delete has no selectable algorithm of its own
pub fn for_bst_operation(operation: BstOperation) -> &'static [&'static str] {
    match operation {
        BstOperation::Insert => BST_INSERT,
        BstOperation::Search => BST_SEARCH,
        BstOperation::Delete => BST_DELETE,
    }
}
