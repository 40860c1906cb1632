mod test_lower_version;
mod test_video_id;
