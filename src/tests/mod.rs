mod editor_properties;
