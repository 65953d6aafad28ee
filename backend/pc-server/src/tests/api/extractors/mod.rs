mod authenticated_identity;
