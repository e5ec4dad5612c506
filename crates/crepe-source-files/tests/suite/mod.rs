mod layer_entries;
