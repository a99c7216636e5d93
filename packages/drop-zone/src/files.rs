use web_sys::FileList;

/// Names of every file in the list, in order.
pub fn file_names(files: &FileList) -> Vec<String> {
    (0..files.length())
        .filter_map(|idx| files.item(idx))
        .map(|file| file.name())
        .collect()
}
